use six_cities_client::Offer;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub favorites: Arc<Vec<Offer>>,
    pub is_favorites_loading: bool,
}

use crate::domain_models::City;
use six_cities_client::Offer;
use std::sync::Arc;

/// All offers (every city) plus the active city
#[derive(Debug, Clone, Default)]
pub struct OffersState {
    pub city: City,
    pub offers: Arc<Vec<Offer>>,
    pub is_offers_loading: bool,
}

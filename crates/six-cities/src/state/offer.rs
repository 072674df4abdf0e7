use six_cities_client::{Offer, Review};
use std::sync::Arc;

/// Detail page data for one offer
///
/// Nearby offers and comments have no loading or error flags of their own.
#[derive(Debug, Clone, Default)]
pub struct OfferState {
    pub current_offer: Option<Offer>,
    pub nearby_offers: Arc<Vec<Offer>>,
    /// Comments in arrival order; sorted at read time
    pub comments: Arc<Vec<Review>>,
    pub is_offer_loading: bool,
    pub is_offer_not_found: bool,
}

//! View model for one offer in a list

use crate::domain_models::rating::stars_text;
use six_cities_client::{Offer, OfferId};

#[derive(Debug, Clone, PartialEq)]
pub struct OfferCardViewModel {
    pub id: OfferId,
    pub title: String,
    /// "Apartment", "Room", ...
    pub kind: String,
    pub price: String,
    pub stars: String,
    pub is_premium: bool,
    pub is_favorite: bool,
    pub is_selected: bool,
}

impl OfferCardViewModel {
    pub fn from_offer(offer: &Offer, is_selected: bool) -> Self {
        Self {
            id: offer.id.clone(),
            title: offer.title.clone(),
            kind: capitalize(&offer.kind),
            price: format!("€{} / night", offer.price),
            stars: stars_text(offer.rating),
            is_premium: offer.is_premium,
            is_favorite: offer.is_favorite,
            is_selected,
        }
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

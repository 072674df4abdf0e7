//! Favorite toggle intent

use six_cities_client::OfferId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteAction {
    /// User asked to flip the favorite flag of an offer.
    /// `is_favorite` is the flag as currently shown.
    Toggle { offer_id: OfferId, is_favorite: bool },
}

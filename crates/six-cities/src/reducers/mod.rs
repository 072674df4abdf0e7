//! Reducers
//!
//! Pure functions `(state, &action) -> state`. `app_reducer::reduce` is the
//! root reducer and hands every action to each slice reducer.

pub mod app_reducer;
pub mod favorites_reducer;
pub mod forms_reducer;
pub mod offer_reducer;
pub mod offers_reducer;
pub mod pages_reducer;
pub mod status_bar_reducer;
pub mod user_reducer;

use six_cities_client::Offer;
use std::sync::Arc;

/// Copy of `offers` with the favorite flag of `updated` applied
///
/// Returns None when no offer matches, so callers keep their existing `Arc`.
pub(crate) fn patch_favorite_flag(offers: &[Offer], updated: &Offer) -> Option<Arc<Vec<Offer>>> {
    if !offers.iter().any(|o| o.id == updated.id) {
        return None;
    }
    let patched = offers
        .iter()
        .map(|o| {
            if o.id == updated.id {
                Offer {
                    is_favorite: updated.is_favorite,
                    ..o.clone()
                }
            } else {
                o.clone()
            }
        })
        .collect();
    Some(Arc::new(patched))
}

//! Favorites page view model
//!
//! Cards are grouped by city. The cursor walks the groups in display order,
//! so a flat index maps onto (group, card).

use super::offer_card::OfferCardViewModel;
use crate::domain_models::AuthorizationStatus;
use crate::selectors::Selectors;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesGroupViewModel {
    pub city: String,
    pub cards: Vec<OfferCardViewModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesPageViewModel {
    pub title: &'static str,
    pub groups: Vec<FavoritesGroupViewModel>,
    pub is_loading: bool,
    /// Shown when nothing is saved
    pub empty_message: Option<&'static str>,
}

impl FavoritesPageViewModel {
    pub fn from_state(state: &AppState, selectors: &Selectors) -> Self {
        let groups = selectors.favorites_by_city(state);
        let total: usize = groups.iter().map(|g| g.offers.len()).sum();
        let cursor = total.checked_sub(1).map(|last| state.favorites_page.cursor.min(last));

        let mut index = 0;
        let groups: Vec<FavoritesGroupViewModel> = groups
            .iter()
            .map(|group| FavoritesGroupViewModel {
                city: group.city.clone(),
                cards: group
                    .offers
                    .iter()
                    .map(|offer| {
                        let card = OfferCardViewModel::from_offer(offer, Some(index) == cursor);
                        index += 1;
                        card
                    })
                    .collect(),
            })
            .collect();

        // The session check decides whether this page is reachable at all
        let is_loading = state.favorites.is_favorites_loading
            || state.user.authorization_status == AuthorizationStatus::Unknown;

        Self {
            title: "Saved listing",
            empty_message: (groups.is_empty() && !is_loading).then_some("Nothing yet saved."),
            groups,
            is_loading,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

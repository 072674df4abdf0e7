//! Offers slice reducer

use super::patch_favorite_flag;
use crate::actions::{Action, ApiEvent, Lifecycle, OffersAction};
use crate::state::OffersState;
use std::sync::Arc;

pub fn reduce(mut state: OffersState, action: &Action) -> OffersState {
    match action {
        Action::Offers(OffersAction::ChangeCity(city)) => {
            state.city = *city;
        }
        Action::Api(ApiEvent::Offers(result)) => match result {
            Lifecycle::Pending => state.is_offers_loading = true,
            Lifecycle::Fulfilled(offers) => {
                state.offers = Arc::new(offers.clone());
                state.is_offers_loading = false;
            }
            Lifecycle::Rejected(_) => state.is_offers_loading = false,
        },
        Action::Api(ApiEvent::ToggleFavorite {
            result: Lifecycle::Fulfilled(updated),
            ..
        }) => {
            if let Some(patched) = patch_favorite_flag(&state.offers, updated) {
                state.offers = patched;
            }
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ApiFailure;
    use crate::domain_models::City;
    use crate::test_support::{favorite, offer};
    use six_cities_client::{FavoriteStatus, OfferId};

    fn offers_event(result: Lifecycle<Vec<six_cities_client::Offer>>) -> Action {
        Action::Api(ApiEvent::Offers(result))
    }

    #[test]
    fn test_initial_state() {
        let state = OffersState::default();
        assert_eq!(state.city, City::Paris);
        assert!(state.offers.is_empty());
        assert!(!state.is_offers_loading);
    }

    #[test]
    fn test_pending_sets_loading() {
        let state = reduce(OffersState::default(), &offers_event(Lifecycle::Pending));
        assert!(state.is_offers_loading);
    }

    #[test]
    fn test_fulfilled_replaces_list() {
        let loading = reduce(OffersState::default(), &offers_event(Lifecycle::Pending));
        let state = reduce(
            loading,
            &offers_event(Lifecycle::Fulfilled(vec![offer("1", "Paris"), offer("2", "Paris")])),
        );
        assert!(!state.is_offers_loading);
        assert_eq!(state.offers.len(), 2);
    }

    #[test]
    fn test_rejected_keeps_list() {
        let state = OffersState {
            offers: Arc::new(vec![offer("1", "Paris")]),
            is_offers_loading: true,
            ..Default::default()
        };
        let state = reduce(
            state,
            &offers_event(Lifecycle::Rejected(ApiFailure::new(Some(500), "boom"))),
        );
        assert!(!state.is_offers_loading);
        assert_eq!(state.offers.len(), 1);
    }

    #[test]
    fn test_change_city_applies_while_loading() {
        let loading = reduce(OffersState::default(), &offers_event(Lifecycle::Pending));
        let state = reduce(
            loading,
            &Action::Offers(OffersAction::ChangeCity(City::Amsterdam)),
        );
        assert_eq!(state.city, City::Amsterdam);
        assert!(state.is_offers_loading);
    }

    #[test]
    fn test_toggle_patches_matching_offer() {
        let state = OffersState {
            offers: Arc::new(vec![offer("1", "Paris"), offer("2", "Paris")]),
            ..Default::default()
        };
        let before = Arc::clone(&state.offers);
        let state = reduce(
            state,
            &Action::Api(ApiEvent::ToggleFavorite {
                offer_id: OfferId::new("2"),
                status: FavoriteStatus::Favorite,
                result: Lifecycle::Fulfilled(favorite("2", "Paris")),
            }),
        );
        assert!(!Arc::ptr_eq(&before, &state.offers));
        assert!(!state.offers[0].is_favorite);
        assert!(state.offers[1].is_favorite);
    }

    #[test]
    fn test_toggle_for_unknown_offer_is_noop() {
        let state = OffersState {
            offers: Arc::new(vec![offer("1", "Paris")]),
            ..Default::default()
        };
        let before = Arc::clone(&state.offers);
        let state = reduce(
            state,
            &Action::Api(ApiEvent::ToggleFavorite {
                offer_id: OfferId::new("9"),
                status: FavoriteStatus::Favorite,
                result: Lifecycle::Fulfilled(favorite("9", "Paris")),
            }),
        );
        assert!(Arc::ptr_eq(&before, &state.offers));
    }
}

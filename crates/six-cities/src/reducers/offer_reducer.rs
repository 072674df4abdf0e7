//! Offer detail slice reducer
//!
//! Offer, nearby offers and comments load concurrently and each call only
//! touches its own field.

use super::patch_favorite_flag;
use crate::actions::{Action, ApiEvent, Lifecycle};
use crate::state::OfferState;
use std::sync::Arc;

pub fn reduce(mut state: OfferState, action: &Action) -> OfferState {
    let Action::Api(event) = action else {
        return state;
    };

    match event {
        ApiEvent::Offer { result, .. } => match result {
            Lifecycle::Pending => {
                state.is_offer_loading = true;
                state.is_offer_not_found = false;
            }
            Lifecycle::Fulfilled(offer) => {
                state.current_offer = Some(offer.clone());
                state.is_offer_loading = false;
            }
            Lifecycle::Rejected(_) => {
                state.is_offer_loading = false;
                state.is_offer_not_found = true;
            }
        },
        ApiEvent::NearbyOffers {
            result: Lifecycle::Fulfilled(offers),
            ..
        } => {
            state.nearby_offers = Arc::new(offers.clone());
        }
        ApiEvent::Comments {
            result: Lifecycle::Fulfilled(comments),
            ..
        } => {
            state.comments = Arc::new(comments.clone());
        }
        ApiEvent::PostComment {
            offer_id,
            result: Lifecycle::Fulfilled(review),
        } => {
            // A post that settles after the user moved to another offer is dropped
            if state.current_offer.as_ref().map(|o| &o.id) == Some(offer_id) {
                let mut comments = state.comments.as_ref().clone();
                comments.push(review.clone());
                state.comments = Arc::new(comments);
            }
        }
        ApiEvent::ToggleFavorite {
            result: Lifecycle::Fulfilled(updated),
            ..
        } => {
            if let Some(current) = state.current_offer.as_mut() {
                if current.id == updated.id {
                    current.is_favorite = updated.is_favorite;
                }
            }
            if let Some(patched) = patch_favorite_flag(&state.nearby_offers, updated) {
                state.nearby_offers = patched;
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
    use crate::test_support::{favorite, offer, review};
    use six_cities_client::{FavoriteStatus, OfferId};

    fn offer_event(id: &str, result: Lifecycle<six_cities_client::Offer>) -> Action {
        Action::Api(ApiEvent::Offer {
            offer_id: OfferId::new(id),
            result,
        })
    }

    fn loaded(id: &str) -> OfferState {
        OfferState {
            current_offer: Some(offer(id, "Paris")),
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_sets_loading_and_clears_not_found() {
        let state = OfferState {
            is_offer_not_found: true,
            ..Default::default()
        };
        let state = reduce(state, &offer_event("1", Lifecycle::Pending));
        assert!(state.is_offer_loading);
        assert!(!state.is_offer_not_found);
    }

    #[test]
    fn test_fulfilled_stores_offer() {
        let state = reduce(OfferState::default(), &offer_event("1", Lifecycle::Pending));
        let state = reduce(state, &offer_event("1", Lifecycle::Fulfilled(offer("1", "Paris"))));
        assert!(!state.is_offer_loading);
        assert_eq!(state.current_offer.map(|o| o.id), Some(OfferId::new("1")));
    }

    #[test]
    fn test_not_found_after_404() {
        let state = reduce(OfferState::default(), &offer_event("999", Lifecycle::Pending));
        let state = reduce(
            state,
            &offer_event(
                "999",
                Lifecycle::Rejected(ApiFailure::new(Some(404), "not found")),
            ),
        );
        assert!(state.is_offer_not_found);
        assert!(!state.is_offer_loading);
    }

    #[test]
    fn test_nearby_and_comments_replace_independently() {
        let state = reduce(
            loaded("1"),
            &Action::Api(ApiEvent::Comments {
                offer_id: OfferId::new("1"),
                result: Lifecycle::Fulfilled(vec![review("r1", "2024-01-01")]),
            }),
        );
        let state = reduce(
            state,
            &Action::Api(ApiEvent::NearbyOffers {
                offer_id: OfferId::new("1"),
                result: Lifecycle::Fulfilled(vec![offer("2", "Paris"), offer("3", "Paris")]),
            }),
        );
        assert_eq!(state.comments.len(), 1);
        assert_eq!(state.nearby_offers.len(), 2);
        assert!(state.current_offer.is_some());
    }

    #[test]
    fn test_posted_comment_is_appended() {
        let mut state = loaded("1");
        state.comments = Arc::new(vec![review("r1", "2024-03-01")]);
        let state = reduce(
            state,
            &Action::Api(ApiEvent::PostComment {
                offer_id: OfferId::new("1"),
                result: Lifecycle::Fulfilled(review("r2", "2023-01-01")),
            }),
        );
        let ids: Vec<&str> = state.comments.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
    }

    #[test]
    fn test_posted_comment_for_other_offer_is_dropped() {
        let state = reduce(
            loaded("1"),
            &Action::Api(ApiEvent::PostComment {
                offer_id: OfferId::new("2"),
                result: Lifecycle::Fulfilled(review("r2", "2023-01-01")),
            }),
        );
        assert!(state.comments.is_empty());
    }

    #[test]
    fn test_toggle_patches_current_and_nearby() {
        let mut state = loaded("1");
        state.nearby_offers = Arc::new(vec![offer("2", "Paris"), offer("3", "Paris")]);

        let state = reduce(
            state,
            &Action::Api(ApiEvent::ToggleFavorite {
                offer_id: OfferId::new("1"),
                status: FavoriteStatus::Favorite,
                result: Lifecycle::Fulfilled(favorite("1", "Paris")),
            }),
        );
        assert!(state.current_offer.as_ref().is_some_and(|o| o.is_favorite));

        let state = reduce(
            state,
            &Action::Api(ApiEvent::ToggleFavorite {
                offer_id: OfferId::new("3"),
                status: FavoriteStatus::Favorite,
                result: Lifecycle::Fulfilled(favorite("3", "Paris")),
            }),
        );
        assert!(!state.nearby_offers[0].is_favorite);
        assert!(state.nearby_offers[1].is_favorite);
    }
}

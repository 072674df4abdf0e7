//! Favorites slice reducer

use crate::actions::{Action, ApiEvent, Lifecycle};
use crate::state::FavoritesState;
use std::sync::Arc;

pub fn reduce(mut state: FavoritesState, action: &Action) -> FavoritesState {
    let Action::Api(event) = action else {
        return state;
    };

    match event {
        ApiEvent::Favorites(result) => match result {
            Lifecycle::Pending => state.is_favorites_loading = true,
            Lifecycle::Fulfilled(offers) => {
                state.favorites = Arc::new(offers.clone());
                state.is_favorites_loading = false;
            }
            Lifecycle::Rejected(_) => state.is_favorites_loading = false,
        },
        ApiEvent::ToggleFavorite {
            result: Lifecycle::Fulfilled(updated),
            ..
        } => {
            let present = state.favorites.iter().any(|o| o.id == updated.id);
            if updated.is_favorite && !present {
                let mut favorites = state.favorites.as_ref().clone();
                favorites.push(updated.clone());
                state.favorites = Arc::new(favorites);
            } else if !updated.is_favorite && present {
                let favorites = state
                    .favorites
                    .iter()
                    .filter(|o| o.id != updated.id)
                    .cloned()
                    .collect();
                state.favorites = Arc::new(favorites);
            }
        }
        ApiEvent::Logout(result) if result.is_settled() => {
            state.favorites = Arc::new(Vec::new());
            state.is_favorites_loading = false;
        }
        _ => {}
    }
    state
}

//! Status Bar Reducer
//!
//! Handles explicit status bar actions and turns settled API calls into
//! user-facing messages. Every rejection is shown, except the expected 401
//! from the startup session check of an anonymous user.

use crate::actions::{Action, ApiEvent, Lifecycle, StatusBarAction};
use crate::state::{StatusBarState, StatusKind, StatusMessage};

pub fn reduce(mut state: StatusBarState, action: &Action) -> StatusBarState {
    match action {
        Action::StatusBar(StatusBarAction::Push {
            kind,
            message,
            source,
        }) => {
            state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
        }
        Action::Api(event) => {
            if let Some(message) = message_for(event) {
                state.push(message);
            }
        }
        _ => {}
    }
    state
}

fn message_for(event: &ApiEvent) -> Option<StatusMessage> {
    let source = event.operation();

    if let Some(failure) = event.failure() {
        if matches!(event, ApiEvent::CheckAuth(_)) && failure.is_unauthorized() {
            return None;
        }
        return Some(StatusMessage::new(
            StatusKind::Error,
            failure.message.clone(),
            source,
        ));
    }

    let (kind, message) = match event {
        ApiEvent::Login(Lifecycle::Fulfilled(user)) => {
            (StatusKind::Success, format!("Signed in as {}", user.email))
        }
        ApiEvent::Logout(Lifecycle::Fulfilled(())) => (StatusKind::Info, "Signed out".to_string()),
        ApiEvent::PostComment {
            result: Lifecycle::Fulfilled(_),
            ..
        } => (StatusKind::Success, "Review posted".to_string()),
        ApiEvent::ToggleFavorite {
            result: Lifecycle::Fulfilled(offer),
            ..
        } => {
            let message = if offer.is_favorite {
                format!("Saved \"{}\" to favorites", offer.title)
            } else {
                format!("Removed \"{}\" from favorites", offer.title)
            };
            (StatusKind::Success, message)
        }
        _ => return None,
    };
    Some(StatusMessage::new(kind, message, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ApiFailure;
    use crate::test_support::favorite;
    use six_cities_client::{FavoriteStatus, OfferId};

    #[test]
    fn test_rejection_is_shown() {
        let state = reduce(
            StatusBarState::default(),
            &Action::Api(ApiEvent::Offers(Lifecycle::Rejected(ApiFailure::new(
                None,
                "GET /offers timed out",
            )))),
        );
        let latest = state.latest_error().unwrap();
        assert_eq!(latest.message, "GET /offers timed out");
        assert_eq!(latest.source, "offers/fetchOffers");
    }

    #[test]
    fn test_anonymous_session_check_is_silent() {
        let state = reduce(
            StatusBarState::default(),
            &Action::Api(ApiEvent::CheckAuth(Lifecycle::Rejected(ApiFailure::new(
                Some(401),
                "unauthorized",
            )))),
        );
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_pending_is_silent() {
        let state = reduce(
            StatusBarState::default(),
            &Action::Api(ApiEvent::Favorites(Lifecycle::Pending)),
        );
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_toggle_success_message() {
        let state = reduce(
            StatusBarState::default(),
            &Action::Api(ApiEvent::ToggleFavorite {
                offer_id: OfferId::new("1"),
                status: FavoriteStatus::Favorite,
                result: Lifecycle::Fulfilled(favorite("1", "Paris")),
            }),
        );
        let latest = state.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Success);
        assert!(latest.message.contains("Offer 1"));
    }

    #[test]
    fn test_push_message() {
        let state = reduce(
            StatusBarState::default(),
            &Action::StatusBar(StatusBarAction::info("hello", "test")),
        );
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.latest().map(|m| m.kind), Some(StatusKind::Info));
    }
}

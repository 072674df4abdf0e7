//! User slice reducer
//!
//! Only the session check, login and logout change the session.

use crate::actions::{Action, ApiEvent, Lifecycle};
use crate::domain_models::AuthorizationStatus;
use crate::state::UserState;

pub fn reduce(mut state: UserState, action: &Action) -> UserState {
    let Action::Api(event) = action else {
        return state;
    };

    match event {
        ApiEvent::CheckAuth(result) | ApiEvent::Login(result) => match result {
            Lifecycle::Pending => {}
            Lifecycle::Fulfilled(user) => {
                state.authorization_status = AuthorizationStatus::Auth;
                state.user = Some(user.clone());
            }
            Lifecycle::Rejected(_) => {
                state.authorization_status = AuthorizationStatus::NoAuth;
                state.user = None;
            }
        },
        // The session is gone locally whatever the server said
        ApiEvent::Logout(result) if result.is_settled() => {
            state.authorization_status = AuthorizationStatus::NoAuth;
            state.user = None;
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ApiFailure;
    use crate::test_support::user;

    fn authorized() -> UserState {
        UserState {
            authorization_status: AuthorizationStatus::Auth,
            user: Some(user("oliver@example.com")),
        }
    }

    #[test]
    fn test_initial_status_is_unknown() {
        let state = UserState::default();
        assert_eq!(state.authorization_status, AuthorizationStatus::Unknown);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_check_auth_fulfilled() {
        let state = reduce(
            UserState::default(),
            &Action::Api(ApiEvent::CheckAuth(Lifecycle::Fulfilled(user("a@b.io")))),
        );
        assert_eq!(state.authorization_status, AuthorizationStatus::Auth);
        assert_eq!(state.user.map(|u| u.email), Some("a@b.io".to_string()));
    }

    #[test]
    fn test_check_auth_rejected() {
        let state = reduce(
            UserState::default(),
            &Action::Api(ApiEvent::CheckAuth(Lifecycle::Rejected(ApiFailure::new(
                Some(401),
                "unauthorized",
            )))),
        );
        assert_eq!(state.authorization_status, AuthorizationStatus::NoAuth);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_pending_changes_nothing() {
        let state = reduce(authorized(), &Action::Api(ApiEvent::Login(Lifecycle::Pending)));
        assert_eq!(state.authorization_status, AuthorizationStatus::Auth);
        let state = reduce(state, &Action::Api(ApiEvent::Logout(Lifecycle::Pending)));
        assert_eq!(state.authorization_status, AuthorizationStatus::Auth);
    }

    #[test]
    fn test_login_rejected_clears_user() {
        let state = reduce(
            authorized(),
            &Action::Api(ApiEvent::Login(Lifecycle::Rejected(ApiFailure::new(
                Some(400),
                "bad request",
            )))),
        );
        assert_eq!(state.authorization_status, AuthorizationStatus::NoAuth);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_logout_settled_clears_user_either_way() {
        let state = reduce(
            authorized(),
            &Action::Api(ApiEvent::Logout(Lifecycle::Fulfilled(()))),
        );
        assert_eq!(state.authorization_status, AuthorizationStatus::NoAuth);
        assert!(state.user.is_none());

        let state = reduce(
            authorized(),
            &Action::Api(ApiEvent::Logout(Lifecycle::Rejected(ApiFailure::new(
                None, "timeout",
            )))),
        );
        assert_eq!(state.authorization_status, AuthorizationStatus::NoAuth);
        assert!(state.user.is_none());
    }
}

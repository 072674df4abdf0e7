use crate::selectors::{is_authorized, select_favorite_count};
use crate::state::AppState;

/// Top bar: logo, signed-in user and the favorites counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub title: &'static str,
    /// Email of the signed-in user
    pub email: Option<String>,
    pub favorite_count: usize,
    /// "Sign in" or "Sign out"
    pub session_action: &'static str,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let authorized = is_authorized(&state.user);
        Self {
            title: "six cities",
            email: state
                .user
                .user
                .as_ref()
                .filter(|_| authorized)
                .map(|u| u.email.clone()),
            favorite_count: select_favorite_count(&state.favorites),
            session_action: if authorized { "Sign out" } else { "Sign in" },
        }
    }
}

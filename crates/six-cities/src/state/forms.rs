//! Form state

use crate::actions::LoginField;
use crate::domain_models::{City, LoginCredentials, ReviewDraft};

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub credentials: LoginCredentials,
    pub focus: LoginField,
    /// Picked each time the login page is entered
    pub featured_city: City,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFormState {
    pub draft: ReviewDraft,
    /// Keys go to the form while focused
    pub is_focused: bool,
    /// A post is in flight
    pub is_submitting: bool,
}

impl ReviewFormState {
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.draft.is_valid()
    }
}

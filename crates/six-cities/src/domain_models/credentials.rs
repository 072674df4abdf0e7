//! Login form credentials

use regex::Regex;
use six_cities_client::AuthData;
use std::sync::OnceLock;

/// Get the email regex (compiled once)
fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// Check that an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email.trim()))
}

/// Email and password as typed into the login form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// Submit is allowed once the email parses and a password was entered
    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email) && !self.password.is_empty()
    }

    /// Convert into the request body, or None while the form is incomplete
    pub fn to_auth_data(&self) -> Option<AuthData> {
        self.can_submit().then(|| AuthData {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

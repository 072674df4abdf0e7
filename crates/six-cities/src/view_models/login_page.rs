use crate::actions::LoginField;
use crate::state::LoginFormState;

/// Sign-in form; the password is masked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPageViewModel {
    pub email: String,
    pub password_mask: String,
    pub focus: LoginField,
    pub can_submit: bool,
    /// Shortcut to the main page on this city
    pub featured_city: &'static str,
}

impl LoginPageViewModel {
    pub fn from_state(form: &LoginFormState) -> Self {
        Self {
            email: form.credentials.email.clone(),
            password_mask: "•".repeat(form.credentials.password.chars().count()),
            focus: form.focus,
            can_submit: form.credentials.can_submit(),
            featured_city: form.featured_city.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{City, LoginCredentials};

    #[test]
    fn test_password_is_masked() {
        let form = LoginFormState {
            credentials: LoginCredentials {
                email: "a@b.co".into(),
                password: "secret".into(),
            },
            focus: LoginField::Password,
            featured_city: City::Cologne,
        };
        let vm = LoginPageViewModel::from_state(&form);
        assert_eq!(vm.password_mask, "••••••");
        assert!(!vm.password_mask.contains("secret"));
        assert!(vm.can_submit);
        assert_eq!(vm.featured_city, "Cologne");
    }
}

//! Login form actions

use crate::domain_models::City;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn other(&self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFormAction {
    /// Character typed into the focused field
    Input(char),
    Backspace,
    /// Move focus to the other field
    SwitchField,
    /// Submit (only sent to the server when the form is valid)
    Submit,
    /// City offered as a shortcut next to the form
    FeatureCity(City),
}

use crate::domain_models::AuthorizationStatus;
use six_cities_client::UserData;

/// Session state. `user` is present only while authorized.
#[derive(Debug, Clone, Default)]
pub struct UserState {
    pub authorization_status: AuthorizationStatus,
    pub user: Option<UserData>,
}

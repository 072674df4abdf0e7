//! Authorization status model

/// Whether the current session is authenticated
///
/// `Unknown` only holds until the startup session check settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorizationStatus {
    #[default]
    Unknown,
    Auth,
    NoAuth,
}

impl AuthorizationStatus {
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}

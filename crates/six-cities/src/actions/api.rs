//! Async action lifecycle
//!
//! Every REST call dispatches `Pending` synchronously when it is issued and
//! exactly one of `Fulfilled` / `Rejected` once it settles.

use six_cities_client::{ApiError, ApiResult, FavoriteStatus, Offer, OfferId, Review, UserData};
use std::fmt;

/// Why a call was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status, when the server answered
    pub status: Option<u16>,
    pub message: String,
}

impl ApiFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl From<&ApiError> for ApiFailure {
    fn from(err: &ApiError) -> Self {
        Self::new(err.status(), err.to_string())
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Phase of an async action
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    Pending,
    Fulfilled(T),
    Rejected(ApiFailure),
}

impl<T> Lifecycle<T> {
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Lifecycle::Fulfilled(value),
            Err(err) => Lifecycle::Rejected(ApiFailure::from(&err)),
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            Lifecycle::Pending => "pending",
            Lifecycle::Fulfilled(_) => "fulfilled",
            Lifecycle::Rejected(_) => "rejected",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Lifecycle::Pending)
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Lifecycle::Rejected(failure) => Some(failure),
            _ => None,
        }
    }
}

/// One phase of one REST operation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    Offers(Lifecycle<Vec<Offer>>),
    Offer {
        offer_id: OfferId,
        result: Lifecycle<Offer>,
    },
    NearbyOffers {
        offer_id: OfferId,
        result: Lifecycle<Vec<Offer>>,
    },
    Comments {
        offer_id: OfferId,
        result: Lifecycle<Vec<Review>>,
    },
    PostComment {
        offer_id: OfferId,
        result: Lifecycle<Review>,
    },
    CheckAuth(Lifecycle<UserData>),
    Login(Lifecycle<UserData>),
    Logout(Lifecycle<()>),
    Favorites(Lifecycle<Vec<Offer>>),
    ToggleFavorite {
        offer_id: OfferId,
        status: FavoriteStatus,
        result: Lifecycle<Offer>,
    },
}

impl ApiEvent {
    /// Operation name, e.g. `offer/fetchOffer`
    pub fn operation(&self) -> &'static str {
        match self {
            ApiEvent::Offers(_) => "offers/fetchOffers",
            ApiEvent::Offer { .. } => "offer/fetchOffer",
            ApiEvent::NearbyOffers { .. } => "offer/fetchNearbyOffers",
            ApiEvent::Comments { .. } => "offer/fetchComments",
            ApiEvent::PostComment { .. } => "offer/postComment",
            ApiEvent::CheckAuth(_) => "user/checkAuth",
            ApiEvent::Login(_) => "user/login",
            ApiEvent::Logout(_) => "user/logout",
            ApiEvent::Favorites(_) => "favorites/fetchFavorites",
            ApiEvent::ToggleFavorite { .. } => "favorites/toggleFavorite",
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            ApiEvent::Offers(r) | ApiEvent::Favorites(r) => r.phase(),
            ApiEvent::NearbyOffers { result, .. } => result.phase(),
            ApiEvent::Offer { result, .. } | ApiEvent::ToggleFavorite { result, .. } => {
                result.phase()
            }
            ApiEvent::Comments { result, .. } => result.phase(),
            ApiEvent::PostComment { result, .. } => result.phase(),
            ApiEvent::CheckAuth(r) | ApiEvent::Login(r) => r.phase(),
            ApiEvent::Logout(r) => r.phase(),
        }
    }

    /// Rejection reason, if this is a `Rejected` phase
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            ApiEvent::Offers(r) | ApiEvent::Favorites(r) => r.failure(),
            ApiEvent::NearbyOffers { result, .. } => result.failure(),
            ApiEvent::Offer { result, .. } | ApiEvent::ToggleFavorite { result, .. } => {
                result.failure()
            }
            ApiEvent::Comments { result, .. } => result.failure(),
            ApiEvent::PostComment { result, .. } => result.failure(),
            ApiEvent::CheckAuth(r) | ApiEvent::Login(r) => r.failure(),
            ApiEvent::Logout(r) => r.failure(),
        }
    }

    /// Short description for logs. Payloads are left out so tokens and
    /// large offer lists never reach the log file.
    pub fn describe(&self) -> String {
        match self.failure() {
            Some(failure) => format!("{}/{}: {}", self.operation(), self.phase(), failure),
            None => format!("{}/{}", self.operation(), self.phase()),
        }
    }
}

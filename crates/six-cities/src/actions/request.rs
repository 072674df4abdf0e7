//! REST call requests

use super::{ApiEvent, Lifecycle};
use six_cities_client::{AuthData, CommentPayload, FavoriteStatus, OfferId};

/// A request for exactly one REST call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FetchOffers,
    FetchOffer(OfferId),
    FetchNearbyOffers(OfferId),
    FetchComments(OfferId),
    PostComment {
        offer_id: OfferId,
        payload: CommentPayload,
    },
    CheckAuth,
    Login(AuthData),
    Logout,
    FetchFavorites,
    ToggleFavorite {
        offer_id: OfferId,
        status: FavoriteStatus,
    },
}

impl ApiRequest {
    /// The `Pending` phase announced when this request is issued
    pub fn pending(&self) -> ApiEvent {
        match self {
            ApiRequest::FetchOffers => ApiEvent::Offers(Lifecycle::Pending),
            ApiRequest::FetchOffer(offer_id) => ApiEvent::Offer {
                offer_id: offer_id.clone(),
                result: Lifecycle::Pending,
            },
            ApiRequest::FetchNearbyOffers(offer_id) => ApiEvent::NearbyOffers {
                offer_id: offer_id.clone(),
                result: Lifecycle::Pending,
            },
            ApiRequest::FetchComments(offer_id) => ApiEvent::Comments {
                offer_id: offer_id.clone(),
                result: Lifecycle::Pending,
            },
            ApiRequest::PostComment { offer_id, .. } => ApiEvent::PostComment {
                offer_id: offer_id.clone(),
                result: Lifecycle::Pending,
            },
            ApiRequest::CheckAuth => ApiEvent::CheckAuth(Lifecycle::Pending),
            ApiRequest::Login(_) => ApiEvent::Login(Lifecycle::Pending),
            ApiRequest::Logout => ApiEvent::Logout(Lifecycle::Pending),
            ApiRequest::FetchFavorites => ApiEvent::Favorites(Lifecycle::Pending),
            ApiRequest::ToggleFavorite { offer_id, status } => ApiEvent::ToggleFavorite {
                offer_id: offer_id.clone(),
                status: *status,
                result: Lifecycle::Pending,
            },
        }
    }
}

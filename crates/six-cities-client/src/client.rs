//! Six cities client trait
//!
//! This module defines the `ApiClient` trait that all client
//! implementations must satisfy.

use crate::error::ApiError;
use crate::types::{AuthData, CommentPayload, FavoriteStatus, Offer, OfferId, Review, UserData};
use async_trait::async_trait;

/// Result alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Six cities REST API client
///
/// One method per REST interaction. Each call performs exactly one request;
/// there is no retry and no backoff.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use six_cities_client::{ApiClient, Offer};
///
/// async fn list(client: &dyn ApiClient) -> six_cities_client::ApiResult<Vec<Offer>> {
///     client.fetch_offers().await
/// }
/// ```
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `GET /offers` - all offers, every city
    async fn fetch_offers(&self) -> ApiResult<Vec<Offer>>;

    /// `GET /offers/{id}` - full offer details
    async fn fetch_offer(&self, offer_id: &OfferId) -> ApiResult<Offer>;

    /// `GET /offers/{id}/nearby` - offers close to the given one
    async fn fetch_nearby_offers(&self, offer_id: &OfferId) -> ApiResult<Vec<Offer>>;

    /// `GET /comments/{id}` - reviews for an offer
    async fn fetch_comments(&self, offer_id: &OfferId) -> ApiResult<Vec<Review>>;

    /// `POST /comments/{id}` - submit a review, returns the created review
    async fn post_comment(&self, offer_id: &OfferId, payload: &CommentPayload)
        -> ApiResult<Review>;

    /// `GET /login` - validate the stored token, returns the profile
    async fn check_auth(&self) -> ApiResult<UserData>;

    /// `POST /login` - authenticate, returns the profile including a token
    async fn login(&self, auth: &AuthData) -> ApiResult<UserData>;

    /// `DELETE /login` - terminate the session
    async fn logout(&self) -> ApiResult<()>;

    /// `GET /favorite` - offers favorited by the current user
    async fn fetch_favorites(&self) -> ApiResult<Vec<Offer>>;

    /// `POST /favorite/{id}/{status}` - set favorite status, returns the updated offer
    async fn set_favorite_status(
        &self,
        offer_id: &OfferId,
        status: FavoriteStatus,
    ) -> ApiResult<Offer>;
}

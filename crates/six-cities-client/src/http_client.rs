//! reqwest-based six cities client
//!
//! Direct implementation of the `ApiClient` trait. The client owns transport
//! details only: base address, fixed timeout, the `x-token` header and
//! mapping HTTP failures onto [`ApiError`].

use crate::client::{ApiClient, ApiResult};
use crate::error::ApiError;
use crate::types::{AuthData, CommentPayload, FavoriteStatus, Offer, OfferId, Review, UserData};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use six_cities_config::{ApiConfig, TokenStorage};
use std::sync::Arc;

/// Header carrying the bearer token
pub const TOKEN_HEADER: &str = "x-token";

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    fn method(&self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Six cities API client over HTTP
///
/// The token is read from storage for every request, so a token saved or
/// dropped by the app takes effect on the next call.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStorage>,
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpApiClient {
    /// Build a client with the configured base address and timeout
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStorage>) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.client.request(verb.method(), url);

        match self.tokens.get() {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn send(&self, verb: Verb, path: &str, request: RequestBuilder) -> ApiResult<Response> {
        debug!("{} {}", verb.as_str(), path);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(verb, path, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} {} -> {}", verb.as_str(), path, status);
            return Err(ApiError::Status {
                method: verb.as_str(),
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Verb::Get, path);
        let response = self.send(Verb::Get, path, request).await?;
        decode(Verb::Get, path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(Verb::Post, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.send(Verb::Post, path, request).await?;
        decode(Verb::Post, path, response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.request(Verb::Delete, path);
        self.send(Verb::Delete, path, request).await?;
        Ok(())
    }
}

/// The client timeout also covers reading the body, so both phases map it the same way
fn transport_error(verb: Verb, path: &str, e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout {
            method: verb.as_str(),
            path: path.to_string(),
        }
    } else {
        ApiError::Transport(e)
    }
}

async fn decode<T: DeserializeOwned>(verb: Verb, path: &str, response: Response) -> ApiResult<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(verb, path, e))?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn fetch_offers(&self) -> ApiResult<Vec<Offer>> {
        let offers: Vec<Offer> = self.get("/offers").await?;
        debug!("Fetched {} offers", offers.len());
        Ok(offers)
    }

    async fn fetch_offer(&self, offer_id: &OfferId) -> ApiResult<Offer> {
        self.get(&format!("/offers/{}", offer_id)).await
    }

    async fn fetch_nearby_offers(&self, offer_id: &OfferId) -> ApiResult<Vec<Offer>> {
        self.get(&format!("/offers/{}/nearby", offer_id)).await
    }

    async fn fetch_comments(&self, offer_id: &OfferId) -> ApiResult<Vec<Review>> {
        self.get(&format!("/comments/{}", offer_id)).await
    }

    async fn post_comment(
        &self,
        offer_id: &OfferId,
        payload: &CommentPayload,
    ) -> ApiResult<Review> {
        self.post(&format!("/comments/{}", offer_id), Some(payload))
            .await
    }

    async fn check_auth(&self) -> ApiResult<UserData> {
        self.get("/login").await
    }

    async fn login(&self, auth: &AuthData) -> ApiResult<UserData> {
        self.post("/login", Some(auth)).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.delete("/login").await
    }

    async fn fetch_favorites(&self) -> ApiResult<Vec<Offer>> {
        self.get("/favorite").await
    }

    async fn set_favorite_status(
        &self,
        offer_id: &OfferId,
        status: FavoriteStatus,
    ) -> ApiResult<Offer> {
        let path = format!("/favorite/{}/{}", offer_id, status.as_path_segment());
        self.post::<(), Offer>(&path, None).await
    }
}

//! Six cities REST API client
//!
//! This crate provides a trait-based client for the six cities backend.
//! The app talks to `dyn ApiClient`, so tests can swap in an in-memory
//! implementation while production uses [`HttpApiClient`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              ApiClient trait             │
//! │  - fetch_offers() / fetch_offer()        │
//! │  - check_auth() / login() / logout()     │
//! │  - fetch_favorites() / set_favorite...() │
//! └──────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌───────────────────┐       ┌──────────────────┐
//!            │  HttpApiClient    │──────►│  TokenStorage    │
//!            │  (reqwest)        │ x-token│ (config crate)  │
//!            └───────────────────┘       └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use six_cities_client::{ApiClient, HttpApiClient};
//! use six_cities_config::{AppConfig, MemoryTokenStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), six_cities_client::ApiError> {
//! let config = AppConfig::default();
//! let client = HttpApiClient::new(&config.api, Arc::new(MemoryTokenStore::new()))?;
//! let offers = client.fetch_offers().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::{ApiClient, ApiResult};
pub use error::ApiError;
pub use http_client::{HttpApiClient, TOKEN_HEADER};
pub use types::{
    AuthData, CityInfo, CommentPayload, FavoriteStatus, Host, Location, Offer, OfferId, Review,
    ReviewAuthor, UserData,
};

//! Six cities API data transfer objects
//!
//! These types mirror the JSON returned by the REST backend (camelCase keys).
//! Optional fields the server may omit are `Option` for scalars and default to
//! empty collections for lists, so "absent" and "empty" read the same.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned offer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OfferId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OfferId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Geographic point, optionally with a map zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
}

/// City reference embedded in an offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub name: String,
    pub location: Location,
}

/// Offer host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_pro: bool,
}

/// A rentable property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Property kind tag, e.g. "apartment", "room"
    #[serde(rename = "type")]
    pub kind: String,
    pub city: CityInfo,
    /// Nightly price, the server may send fractional amounts
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub preview_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "optional_count", skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "optional_count", skip_serializing_if = "Option::is_none")]
    pub max_adults: Option<u32>,
    #[serde(default)]
    pub goods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Host>,
    pub location: Location,
}

/// Accepts integral counts sent as JSON floats (`3.0`), rounding anything fractional
fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(n) if n.is_finite() && n >= 0.0 && n <= u32::MAX as f64 => Ok(Some(n.round() as u32)),
        Some(n) => Err(serde::de::Error::custom(format!("invalid count {n}"))),
    }
}

/// Review author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A review (comment) on an offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user: ReviewAuthor,
    pub rating: f64,
    pub comment: String,
    /// ISO-8601 timestamp as sent by the server
    pub date: String,
}

impl Review {
    /// Parse `date` as RFC 3339, falling back to a plain `YYYY-MM-DD` date
    ///
    /// Returns None when the server sent something else.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(date.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|date| date.and_utc())
    }
}

/// Authenticated user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
    pub email: String,
    pub token: String,
}

/// Login credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AuthData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthData")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /comments/{offerId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    pub comment: String,
    pub rating: u8,
}

/// Desired favorite status, encoded as `1`/`0` in the request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    Favorite,
    Unfavorite,
}

impl FavoriteStatus {
    /// Status that flips the given favorite flag
    pub fn toggled_from(is_favorite: bool) -> Self {
        if is_favorite {
            Self::Unfavorite
        } else {
            Self::Favorite
        }
    }

    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::Favorite => "1",
            Self::Unfavorite => "0",
        }
    }
}

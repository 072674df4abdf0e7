//! Test fixtures and an in-memory API client

use crate::domain_models::City;
use async_trait::async_trait;
use six_cities_client::{
    ApiClient, ApiError, ApiResult, AuthData, CityInfo, CommentPayload, FavoriteStatus, Location,
    Offer, OfferId, Review, ReviewAuthor, UserData,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub fn offer(id: &str, city: &str) -> Offer {
    let location = city
        .parse::<City>()
        .ok()
        .map(|c| c.location())
        .unwrap_or(Location {
            latitude: 0.0,
            longitude: 0.0,
            zoom: Some(12),
        });
    Offer {
        id: OfferId::new(id),
        title: format!("Offer {}", id),
        description: None,
        kind: "apartment".to_string(),
        city: CityInfo {
            name: city.to_string(),
            location,
        },
        price: 120.0,
        rating: 4.0,
        is_premium: false,
        is_favorite: false,
        preview_image: format!("https://example.com/{}.jpg", id),
        images: Vec::new(),
        bedrooms: None,
        max_adults: None,
        goods: Vec::new(),
        host: None,
        location,
    }
}

pub fn favorite(id: &str, city: &str) -> Offer {
    Offer {
        is_favorite: true,
        ..offer(id, city)
    }
}

pub fn review(id: &str, date: &str) -> Review {
    Review {
        id: id.to_string(),
        user: ReviewAuthor {
            name: "Max".to_string(),
            avatar_url: None,
        },
        rating: 4.0,
        comment: format!("Review {}", id),
        date: date.to_string(),
    }
}

pub fn user(email: &str) -> UserData {
    UserData {
        name: email.split('@').next().unwrap_or(email).to_string(),
        avatar_url: String::new(),
        is_pro: false,
        email: email.to_string(),
        token: format!("token-{}", email),
    }
}

fn status_error(method: &'static str, path: String, status: u16) -> ApiError {
    ApiError::Status {
        method,
        path,
        status,
    }
}

/// In-memory stand-in for the REST backend
///
/// Holds a catalogue of offers, a session and a set of favorite ids. Every
/// call is recorded as `"METHOD /path"`.
#[derive(Default)]
pub struct FakeApiClient {
    offers: Mutex<Vec<Offer>>,
    comments: Mutex<Vec<Review>>,
    session: Mutex<Option<UserData>>,
    favorite_ids: Mutex<BTreeSet<OfferId>>,
    failing: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl FakeApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offers(self, offers: Vec<Offer>) -> Self {
        {
            let mut ids = self.favorite_ids.lock().unwrap();
            ids.extend(offers.iter().filter(|o| o.is_favorite).map(|o| o.id.clone()));
        }
        *self.offers.lock().unwrap() = offers;
        self
    }

    pub fn with_comments(self, comments: Vec<Review>) -> Self {
        *self.comments.lock().unwrap() = comments;
        self
    }

    pub fn with_session(self, user: UserData) -> Self {
        *self.session.lock().unwrap() = Some(user);
        self
    }

    /// Every call of the named operation fails with status 500
    pub fn failing(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    async fn record(
        &self,
        operation: &'static str,
        method: &'static str,
        path: String,
    ) -> ApiResult<()> {
        self.calls.lock().unwrap().push(format!("{} {}", method, path));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(operation) {
            return Err(status_error(method, path, 500));
        }
        Ok(())
    }

    fn with_favorite_flags(&self, offer: &Offer) -> Offer {
        let is_favorite = self.favorite_ids.lock().unwrap().contains(&offer.id);
        Offer {
            is_favorite,
            ..offer.clone()
        }
    }

    fn find(&self, id: &OfferId) -> Option<Offer> {
        let offers = self.offers.lock().unwrap();
        offers
            .iter()
            .find(|o| &o.id == id)
            .map(|o| self.with_favorite_flags(o))
    }

    fn require_session(&self, method: &'static str, path: &str) -> ApiResult<UserData> {
        self.session
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| status_error(method, path.to_string(), 401))
    }
}

#[async_trait]
impl ApiClient for FakeApiClient {
    async fn fetch_offers(&self) -> ApiResult<Vec<Offer>> {
        self.record("fetch_offers", "GET", "/offers".into()).await?;
        let offers = self.offers.lock().unwrap().clone();
        Ok(offers.iter().map(|o| self.with_favorite_flags(o)).collect())
    }

    async fn fetch_offer(&self, offer_id: &OfferId) -> ApiResult<Offer> {
        let path = format!("/offers/{}", offer_id);
        self.record("fetch_offer", "GET", path.clone()).await?;
        self.find(offer_id)
            .ok_or_else(|| status_error("GET", path, 404))
    }

    async fn fetch_nearby_offers(&self, offer_id: &OfferId) -> ApiResult<Vec<Offer>> {
        let path = format!("/offers/{}/nearby", offer_id);
        self.record("fetch_nearby_offers", "GET", path.clone())
            .await?;
        let current = self
            .find(offer_id)
            .ok_or_else(|| status_error("GET", path, 404))?;
        let offers = self.offers.lock().unwrap().clone();
        Ok(offers
            .iter()
            .filter(|o| o.id != current.id && o.city.name == current.city.name)
            .map(|o| self.with_favorite_flags(o))
            .collect())
    }

    async fn fetch_comments(&self, offer_id: &OfferId) -> ApiResult<Vec<Review>> {
        self.record("fetch_comments", "GET", format!("/comments/{}", offer_id))
            .await?;
        Ok(self.comments.lock().unwrap().clone())
    }

    async fn post_comment(
        &self,
        offer_id: &OfferId,
        payload: &CommentPayload,
    ) -> ApiResult<Review> {
        let path = format!("/comments/{}", offer_id);
        self.record("post_comment", "POST", path.clone()).await?;
        let author = self.require_session("POST", &path)?;
        let mut comments = self.comments.lock().unwrap();
        let review = Review {
            id: format!("posted-{}", comments.len() + 1),
            user: ReviewAuthor {
                name: author.name,
                avatar_url: None,
            },
            rating: payload.rating as f64,
            comment: payload.comment.clone(),
            date: "2024-06-01T12:00:00.000Z".to_string(),
        };
        comments.push(review.clone());
        Ok(review)
    }

    async fn check_auth(&self) -> ApiResult<UserData> {
        self.record("check_auth", "GET", "/login".into()).await?;
        self.require_session("GET", "/login")
    }

    async fn login(&self, auth: &AuthData) -> ApiResult<UserData> {
        self.record("login", "POST", "/login".into()).await?;
        let profile = user(&auth.email);
        *self.session.lock().unwrap() = Some(profile.clone());
        Ok(profile)
    }

    async fn logout(&self) -> ApiResult<()> {
        let result = self.record("logout", "DELETE", "/login".into()).await;
        *self.session.lock().unwrap() = None;
        result
    }

    async fn fetch_favorites(&self) -> ApiResult<Vec<Offer>> {
        self.record("fetch_favorites", "GET", "/favorite".into())
            .await?;
        self.require_session("GET", "/favorite")?;
        let offers = self.offers.lock().unwrap().clone();
        Ok(offers
            .iter()
            .map(|o| self.with_favorite_flags(o))
            .filter(|o| o.is_favorite)
            .collect())
    }

    async fn set_favorite_status(
        &self,
        offer_id: &OfferId,
        status: FavoriteStatus,
    ) -> ApiResult<Offer> {
        let path = format!("/favorite/{}/{}", offer_id, status.as_path_segment());
        self.record("set_favorite_status", "POST", path.clone())
            .await?;
        self.require_session("POST", &path)?;
        if self.find(offer_id).is_none() {
            return Err(status_error("POST", path, 404));
        }
        {
            let mut ids = self.favorite_ids.lock().unwrap();
            match status {
                FavoriteStatus::Favorite => ids.insert(offer_id.clone()),
                FavoriteStatus::Unfavorite => ids.remove(offer_id),
            };
        }
        self.find(offer_id)
            .ok_or_else(|| status_error("POST", path, 404))
    }
}

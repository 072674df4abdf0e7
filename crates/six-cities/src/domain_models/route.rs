//! Routes
//!
//! Each page of the app is addressed by a path, the way the web client
//! addresses them:
//!
//! | Path           | Route          | Access          |
//! |----------------|----------------|-----------------|
//! | `/`            | `Main`         | anyone          |
//! | `/login`       | `Login`        | anonymous only  |
//! | `/favorites`   | `Favorites`    | authorized only |
//! | `/offer/{id}`  | `Offer(id)`    | anyone          |
//! | `/404`, other  | `NotFound`     | anyone          |

use super::AuthorizationStatus;
use six_cities_client::OfferId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Main,
    Login,
    Favorites,
    Offer(OfferId),
    NotFound,
}

impl Route {
    /// Parse a path; anything unknown is `NotFound`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed
            .strip_suffix('/')
            .filter(|p| !p.is_empty())
            .unwrap_or(trimmed);

        match trimmed {
            "/" | "" => Route::Main,
            "/login" => Route::Login,
            "/favorites" => Route::Favorites,
            "/404" => Route::NotFound,
            other => match other.strip_prefix("/offer/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Offer(OfferId::new(id)),
                _ => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Main => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Offer(id) => format!("/offer/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Route that is actually shown for the requested one
    ///
    /// - `/favorites` without a session goes to `/login`
    /// - `/login` with a session goes to `/`
    ///
    /// While the session check is still running the route is kept as is;
    /// the guard is applied again once the status is known.
    pub fn guarded(self, status: AuthorizationStatus) -> Self {
        match (&self, status) {
            (Route::Favorites, AuthorizationStatus::NoAuth) => Route::Login,
            (Route::Login, AuthorizationStatus::Auth) => Route::Main,
            _ => self,
        }
    }

    pub fn offer_id(&self) -> Option<&OfferId> {
        match self {
            Route::Offer(id) => Some(id),
            _ => None,
        }
    }
}

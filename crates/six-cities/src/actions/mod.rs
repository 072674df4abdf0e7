//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (bootstrap, quit, raw key events)
//! - `Navigation`: route requests and confirmed route changes
//! - Page and form actions, already targeted at one slice
//! - `Request` / `Api`: the async action set. A `Request` asks for one REST
//!   call; `Api` carries that call's `Pending`, `Fulfilled` or `Rejected`
//!   phase back to the reducers.

pub mod api;
pub mod favorite;
pub mod global;
pub mod login_form;
pub mod main_page;
pub mod navigation;
pub mod offers;
pub mod request;
pub mod review_form;
pub mod status_bar;

pub use api::{ApiEvent, ApiFailure, Lifecycle};
pub use favorite::FavoriteAction;
pub use global::GlobalAction;
pub use login_form::{LoginField, LoginFormAction};
pub use main_page::{ListAction, MainPageAction};
pub use navigation::NavigationAction;
pub use offers::OffersAction;
pub use request::ApiRequest;
pub use review_form::ReviewFormAction;
pub use status_bar::StatusBarAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Route requests and route changes
    Navigation(NavigationAction),
    /// Offer list slice actions
    Offers(OffersAction),
    /// Main page (sort + cursor)
    MainPage(MainPageAction),
    /// Favorites page cursor
    FavoritesPage(ListAction),
    /// Favorite toggle intent from any page
    Favorite(FavoriteAction),
    /// Login form editing and submit
    LoginForm(LoginFormAction),
    /// Review form editing and submit
    ReviewForm(ReviewFormAction),
    /// Ask for a REST call
    Request(ApiRequest),
    /// Lifecycle of a REST call
    Api(ApiEvent),
    /// Status bar messages
    StatusBar(StatusBarAction),
    /// No-op action (used when an effect ends without a result)
    None,
}

impl Action {
    pub fn navigate(route: crate::domain_models::Route) -> Self {
        Action::Navigation(NavigationAction::Navigate(route))
    }
}

impl From<ApiEvent> for Action {
    fn from(event: ApiEvent) -> Self {
        Action::Api(event)
    }
}

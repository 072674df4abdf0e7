//! Router Middleware
//!
//! Resolves `Navigate` requests into `RouteChanged` and loads the data a
//! page needs when it is entered.
//!
//! # Guards
//! - `/favorites` needs a session; anonymous users are sent to `/login`
//! - `/login` with a session is sent to `/`
//! - while the session check is running the requested route is kept, and
//!   the guards are applied again once it settles
//!
//! # Loading
//! - `/offer/{id}`: offer, nearby offers and comments (concurrently)
//! - `/favorites`: favorites
//! - `/login`: a random city to offer next to the form
//!
//! A rejected fetch of the offer being shown switches to the not-found page.

use crate::actions::{Action, ApiEvent, ApiRequest, Lifecycle, LoginFormAction, NavigationAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{AuthorizationStatus, City, Route};
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct RouterMiddleware;

impl RouterMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn load_route_data(route: &Route, status: AuthorizationStatus, dispatcher: &Dispatcher) {
        match route {
            Route::Offer(offer_id) => {
                dispatcher.dispatch(Action::Request(ApiRequest::FetchOffer(offer_id.clone())));
                dispatcher.dispatch(Action::Request(ApiRequest::FetchNearbyOffers(
                    offer_id.clone(),
                )));
                dispatcher.dispatch(Action::Request(ApiRequest::FetchComments(offer_id.clone())));
            }
            Route::Favorites if status.is_auth() => {
                dispatcher.dispatch(Action::Request(ApiRequest::FetchFavorites));
            }
            _ => {}
        }
    }

    /// Session status once `event` is reduced, if it changes it
    fn status_after(event: &ApiEvent) -> Option<AuthorizationStatus> {
        match event {
            ApiEvent::CheckAuth(Lifecycle::Fulfilled(_)) | ApiEvent::Login(Lifecycle::Fulfilled(_)) => {
                Some(AuthorizationStatus::Auth)
            }
            ApiEvent::CheckAuth(Lifecycle::Rejected(_)) | ApiEvent::Login(Lifecycle::Rejected(_)) => {
                Some(AuthorizationStatus::NoAuth)
            }
            ApiEvent::Logout(result) if result.is_settled() => Some(AuthorizationStatus::NoAuth),
            _ => None,
        }
    }
}

impl Middleware for RouterMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Navigation(NavigationAction::Navigate(route)) => {
                let target = route.clone().guarded(state.user.authorization_status);
                if target != *route {
                    log::info!("Router: {} redirected to {}", route.path(), target.path());
                }
                dispatcher.dispatch(Action::Navigation(NavigationAction::RouteChanged(target)));
                false
            }
            Action::Navigation(NavigationAction::RouteChanged(route)) => {
                if *route == Route::Login && state.route != Route::Login {
                    dispatcher.dispatch(Action::LoginForm(LoginFormAction::FeatureCity(
                        City::random(),
                    )));
                }
                Self::load_route_data(route, state.user.authorization_status, dispatcher);
                true
            }
            Action::Api(ApiEvent::Offer {
                offer_id,
                result: Lifecycle::Rejected(_),
            }) => {
                if state.route.offer_id() == Some(offer_id) {
                    dispatcher.dispatch(Action::navigate(Route::NotFound));
                }
                true
            }
            Action::Api(event) => {
                // Re-apply guards to the current page when the session changes
                if let Some(status) = Self::status_after(event) {
                    if state.route.clone().guarded(status) != state.route {
                        dispatcher.dispatch(Action::navigate(state.route.clone()));
                    }
                }
                true
            }
            _ => true,
        }
    }
}

//! Session Middleware
//!
//! Session-level orchestration:
//! - on bootstrap, checks the stored session and loads all offers
//! - once a session is confirmed (check or login), loads favorites
//! - favorite toggles: anonymous users are sent to the login page, signed
//!   in users get a `ToggleFavorite` request with the flipped status
//! - sign in / sign out from the header

use crate::actions::{
    Action, ApiEvent, ApiRequest, FavoriteAction, GlobalAction, Lifecycle, StatusBarAction,
};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Route;
use crate::middleware::Middleware;
use crate::selectors::is_authorized;
use crate::state::AppState;
use six_cities_client::FavoriteStatus;

pub struct SessionMiddleware;

impl SessionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Bootstrap) => {
                log::info!("SessionMiddleware: bootstrapping session and offers");
                dispatcher.dispatch(Action::Request(ApiRequest::CheckAuth));
                dispatcher.dispatch(Action::Request(ApiRequest::FetchOffers));
                true
            }
            Action::Api(ApiEvent::CheckAuth(Lifecycle::Fulfilled(_)))
            | Action::Api(ApiEvent::Login(Lifecycle::Fulfilled(_))) => {
                dispatcher.dispatch(Action::Request(ApiRequest::FetchFavorites));
                true
            }
            Action::Favorite(FavoriteAction::Toggle {
                offer_id,
                is_favorite,
            }) => {
                if is_authorized(&state.user) {
                    dispatcher.dispatch(Action::Request(ApiRequest::ToggleFavorite {
                        offer_id: offer_id.clone(),
                        status: FavoriteStatus::toggled_from(*is_favorite),
                    }));
                } else {
                    dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                        "Sign in to save favorites",
                        "favorites",
                    )));
                    dispatcher.dispatch(Action::navigate(Route::Login));
                }
                false
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::api_middleware::ApiMiddleware;
    use crate::middleware::router_middleware::RouterMiddleware;
    use crate::selectors::select_favorite_count;
    use crate::store::Store;
    use crate::test_support::{favorite, offer, user, FakeApiClient};
    use six_cities_client::{ApiClient, OfferId};
    use six_cities_config::MemoryTokenStore;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn store_with(client: FakeApiClient) -> (Store, Arc<FakeApiClient>) {
        let client = Arc::new(client);
        let mut store = Store::new(AppState::default(), Handle::current());
        store.add_middleware(Box::new(RouterMiddleware::new()));
        store.add_middleware(Box::new(SessionMiddleware::new()));
        store.add_middleware(Box::new(ApiMiddleware::new(
            Arc::clone(&client) as Arc<dyn ApiClient>,
            Arc::new(MemoryTokenStore::new()),
        )));
        (store, client)
    }

    fn toggle(id: &str, is_favorite: bool) -> Action {
        Action::Favorite(FavoriteAction::Toggle {
            offer_id: OfferId::new(id),
            is_favorite,
        })
    }

    #[tokio::test]
    async fn test_bootstrap_checks_session_and_loads_offers() {
        let client = FakeApiClient::new()
            .with_offers(vec![offer("1", "Paris"), favorite("2", "Paris")])
            .with_session(user("a@b.io"));
        let (mut store, client) = store_with(client);

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        assert!(store.state().offers.is_offers_loading);
        store.settle().await;

        assert!(store.state().user.authorization_status.is_auth());
        assert_eq!(store.state().offers.offers.len(), 2);
        assert_eq!(client.call_count("GET /favorite"), 1);
        assert_eq!(select_favorite_count(&store.state().favorites), 1);
    }

    #[tokio::test]
    async fn test_anonymous_bootstrap_skips_favorites() {
        let (mut store, client) = store_with(FakeApiClient::new());

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        store.settle().await;

        assert!(!store.state().user.authorization_status.is_auth());
        assert_eq!(client.call_count("GET /favorite"), 0);
    }

    #[tokio::test]
    async fn test_anonymous_toggle_goes_to_login() {
        let (mut store, client) = store_with(FakeApiClient::new().with_offers(vec![offer("1", "Paris")]));

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        store.settle().await;
        store.dispatch(toggle("1", false));
        store.settle().await;

        assert_eq!(store.state().route, Route::Login);
        assert!(client.calls().iter().all(|c| !c.starts_with("POST /favorite")));
    }

    #[tokio::test]
    async fn test_toggle_updates_all_slices() {
        let client = FakeApiClient::new()
            .with_offers(vec![offer("1", "Paris"), offer("2", "Paris")])
            .with_session(user("a@b.io"));
        let (mut store, client) = store_with(client);

        store.dispatch(Action::Global(GlobalAction::Bootstrap));
        store.settle().await;
        store.dispatch(Action::navigate(Route::Offer(OfferId::new("1"))));
        store.settle().await;

        store.dispatch(toggle("1", false));
        store.settle().await;
        assert_eq!(client.call_count("POST /favorite/1/1"), 1);

        let state = store.state();
        assert!(state.offers.offers[0].is_favorite);
        assert!(state.offer.current_offer.as_ref().is_some_and(|o| o.is_favorite));
        assert_eq!(select_favorite_count(&state.favorites), 1);

        store.dispatch(toggle("1", true));
        store.settle().await;
        assert_eq!(client.call_count("POST /favorite/1/0"), 1);
        assert!(!store.state().offers.offers[0].is_favorite);
        assert_eq!(select_favorite_count(&store.state().favorites), 0);
    }
}

//! API Middleware
//!
//! Turns `Request` actions into REST calls:
//! 1. dispatches the `Pending` phase (reduced before `dispatch` returns)
//! 2. spawns one effect that performs the call
//! 3. the effect settles into `Fulfilled` or `Rejected`
//!
//! It also owns token persistence. The token is saved when login succeeds
//! and dropped when logout settles (whatever the outcome) or when the
//! session check is answered with 401.

use crate::actions::{Action, ApiEvent, ApiRequest, Lifecycle};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use six_cities_client::ApiClient;
use six_cities_config::TokenStorage;
use std::sync::Arc;

pub struct ApiMiddleware {
    client: Arc<dyn ApiClient>,
    tokens: Arc<dyn TokenStorage>,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn ApiClient>, tokens: Arc<dyn TokenStorage>) -> Self {
        Self { client, tokens }
    }

    fn issue(&self, request: &ApiRequest, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Api(request.pending()));

        let client = Arc::clone(&self.client);
        let request = request.clone();
        dispatcher.spawn(async move { Action::Api(perform(client.as_ref(), request).await) });
    }

    fn persist_token(&self, event: &ApiEvent) {
        match event {
            ApiEvent::Login(Lifecycle::Fulfilled(user)) => {
                if let Err(e) = self.tokens.save(&user.token) {
                    log::error!("ApiMiddleware: failed to save token: {}", e);
                }
            }
            ApiEvent::Logout(result) if result.is_settled() => self.drop_token(),
            ApiEvent::CheckAuth(Lifecycle::Rejected(failure)) if failure.is_unauthorized() => {
                log::info!("ApiMiddleware: stored token rejected, dropping it");
                self.drop_token();
            }
            _ => {}
        }
    }

    fn drop_token(&self) {
        if let Err(e) = self.tokens.drop_token() {
            log::error!("ApiMiddleware: failed to drop token: {}", e);
        }
    }
}

/// Perform one REST call and wrap its outcome
async fn perform(client: &dyn ApiClient, request: ApiRequest) -> ApiEvent {
    let event = match request {
        ApiRequest::FetchOffers => ApiEvent::Offers(Lifecycle::from_result(client.fetch_offers().await)),
        ApiRequest::FetchOffer(offer_id) => {
            let result = Lifecycle::from_result(client.fetch_offer(&offer_id).await);
            ApiEvent::Offer { offer_id, result }
        }
        ApiRequest::FetchNearbyOffers(offer_id) => {
            let result = Lifecycle::from_result(client.fetch_nearby_offers(&offer_id).await);
            ApiEvent::NearbyOffers { offer_id, result }
        }
        ApiRequest::FetchComments(offer_id) => {
            let result = Lifecycle::from_result(client.fetch_comments(&offer_id).await);
            ApiEvent::Comments { offer_id, result }
        }
        ApiRequest::PostComment { offer_id, payload } => {
            let result = Lifecycle::from_result(client.post_comment(&offer_id, &payload).await);
            ApiEvent::PostComment { offer_id, result }
        }
        ApiRequest::CheckAuth => ApiEvent::CheckAuth(Lifecycle::from_result(client.check_auth().await)),
        ApiRequest::Login(auth) => ApiEvent::Login(Lifecycle::from_result(client.login(&auth).await)),
        ApiRequest::Logout => ApiEvent::Logout(Lifecycle::from_result(client.logout().await)),
        ApiRequest::FetchFavorites => {
            ApiEvent::Favorites(Lifecycle::from_result(client.fetch_favorites().await))
        }
        ApiRequest::ToggleFavorite { offer_id, status } => {
            let result = Lifecycle::from_result(client.set_favorite_status(&offer_id, status).await);
            ApiEvent::ToggleFavorite {
                offer_id,
                status,
                result,
            }
        }
    };

    if let Some(failure) = event.failure() {
        log::warn!("{} rejected: {}", event.operation(), failure);
    }
    event
}

impl Middleware for ApiMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Request(request) => {
                self.issue(request, dispatcher);
                false
            }
            Action::Api(event) => {
                self.persist_token(event);
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::AuthorizationStatus;
    use crate::store::Store;
    use crate::test_support::{offer, user, FakeApiClient};
    use six_cities_client::{AuthData, OfferId};
    use six_cities_config::MemoryTokenStore;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn store_with(client: FakeApiClient, tokens: Arc<MemoryTokenStore>) -> (Store, Arc<FakeApiClient>) {
        let client = Arc::new(client);
        let mut store = Store::new(AppState::default(), Handle::current());
        store.add_middleware(Box::new(ApiMiddleware::new(
            Arc::clone(&client) as Arc<dyn ApiClient>,
            tokens,
        )));
        (store, client)
    }

    #[tokio::test]
    async fn test_pending_is_reduced_inside_dispatch() {
        let client = FakeApiClient::new()
            .with_offers(vec![offer("1", "Paris")])
            .with_delay(Duration::from_millis(20));
        let (mut store, _) = store_with(client, Arc::new(MemoryTokenStore::new()));

        store.dispatch(Action::Request(ApiRequest::FetchOffers));
        assert!(store.state().offers.is_offers_loading);
        assert_eq!(store.in_flight(), 1);

        store.settle().await;
        assert!(!store.state().offers.is_offers_loading);
        assert_eq!(store.state().offers.offers.len(), 1);
    }

    #[tokio::test]
    async fn test_exactly_one_call_per_request() {
        let (mut store, client) = store_with(FakeApiClient::new(), Arc::new(MemoryTokenStore::new()));
        store.dispatch(Action::Request(ApiRequest::FetchOffers));
        store.settle().await;
        assert_eq!(client.calls(), vec!["GET /offers".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_offers_with_paris_offers() {
        let client = FakeApiClient::new().with_offers(vec![offer("1", "Paris"), offer("2", "Paris")]);
        let (mut store, _) = store_with(client, Arc::new(MemoryTokenStore::new()));

        store.dispatch(Action::Request(ApiRequest::FetchOffers));
        store.settle().await;

        let ids: Vec<&str> = store.state().offers.offers.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_fetch_unknown_offer_sets_not_found() {
        let (mut store, _) = store_with(FakeApiClient::new(), Arc::new(MemoryTokenStore::new()));

        store.dispatch(Action::Request(ApiRequest::FetchOffer(OfferId::new("999"))));
        assert!(store.state().offer.is_offer_loading);
        store.settle().await;

        assert!(store.state().offer.is_offer_not_found);
        assert!(!store.state().offer.is_offer_loading);
    }

    #[tokio::test]
    async fn test_login_saves_token() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let (mut store, _) = store_with(FakeApiClient::new(), Arc::clone(&tokens));

        store.dispatch(Action::Request(ApiRequest::Login(AuthData {
            email: "a@b.io".into(),
            password: "pw1".into(),
        })));
        store.settle().await;

        assert_eq!(tokens.get(), Some("token-a@b.io".to_string()));
        assert_eq!(store.state().user.authorization_status, AuthorizationStatus::Auth);
    }

    #[tokio::test]
    async fn test_logout_drops_token_even_when_rejected() {
        let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
        let client = FakeApiClient::new()
            .with_session(user("a@b.io"))
            .failing("logout");
        let (mut store, _) = store_with(client, Arc::clone(&tokens));

        store.dispatch(Action::Request(ApiRequest::Logout));
        store.settle().await;

        assert_eq!(tokens.get(), None);
        assert_eq!(store.state().user.authorization_status, AuthorizationStatus::NoAuth);
    }

    #[tokio::test]
    async fn test_unauthorized_session_check_drops_token() {
        let tokens = Arc::new(MemoryTokenStore::with_token("expired"));
        let (mut store, _) = store_with(FakeApiClient::new(), Arc::clone(&tokens));

        store.dispatch(Action::Request(ApiRequest::CheckAuth));
        store.settle().await;

        assert_eq!(tokens.get(), None);
        assert_eq!(store.state().user.authorization_status, AuthorizationStatus::NoAuth);
    }

    #[tokio::test]
    async fn test_failed_session_check_keeps_token() {
        let tokens = Arc::new(MemoryTokenStore::with_token("valid"));
        let client = FakeApiClient::new().failing("check_auth");
        let (mut store, _) = store_with(client, Arc::clone(&tokens));

        store.dispatch(Action::Request(ApiRequest::CheckAuth));
        store.settle().await;

        assert_eq!(tokens.get(), Some("valid".to_string()));
        assert_eq!(store.state().user.authorization_status, AuthorizationStatus::NoAuth);
    }

    #[tokio::test]
    async fn test_concurrent_offer_page_calls() {
        let client = FakeApiClient::new()
            .with_offers(vec![offer("1", "Paris"), offer("2", "Paris"), offer("3", "Hamburg")])
            .with_delay(Duration::from_millis(5));
        let (mut store, client) = store_with(client, Arc::new(MemoryTokenStore::new()));

        let id = OfferId::new("1");
        store.dispatch(Action::Request(ApiRequest::FetchOffer(id.clone())));
        store.dispatch(Action::Request(ApiRequest::FetchNearbyOffers(id.clone())));
        store.dispatch(Action::Request(ApiRequest::FetchComments(id)));
        assert_eq!(store.in_flight(), 3);
        store.settle().await;

        let state = store.state();
        assert_eq!(state.offer.current_offer.as_ref().map(|o| o.id.as_str()), Some("1"));
        assert_eq!(state.offer.nearby_offers.len(), 1);
        assert_eq!(client.calls().len(), 3);
    }
}

//! Forms Middleware
//!
//! Turns form submits into REST requests. A submit is ignored while the
//! form is invalid; the reducers never see `Submit`.

use crate::actions::{Action, ApiRequest, LoginFormAction, ReviewFormAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::selectors::is_authorized;
use crate::state::AppState;

pub struct FormsMiddleware;

impl FormsMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn submit_login(state: &AppState, dispatcher: &Dispatcher) {
        match state.login_form.credentials.to_auth_data() {
            Some(auth) => dispatcher.dispatch(Action::Request(ApiRequest::Login(auth))),
            None => dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Enter a valid email and a password",
                "login",
            ))),
        }
    }

    fn submit_review(state: &AppState, dispatcher: &Dispatcher) {
        let Some(offer_id) = state.route.offer_id() else {
            return;
        };
        if !is_authorized(&state.user) || state.review_form.is_submitting {
            return;
        }
        match state.review_form.draft.to_payload() {
            Some(payload) => dispatcher.dispatch(Action::Request(ApiRequest::PostComment {
                offer_id: offer_id.clone(),
                payload,
            })),
            None => dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "Pick a rating and write 50 to 300 characters",
                "review",
            ))),
        }
    }
}

impl Middleware for FormsMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::LoginForm(LoginFormAction::Submit) => {
                Self::submit_login(state, dispatcher);
                false
            }
            Action::ReviewForm(ReviewFormAction::Submit) => {
                Self::submit_review(state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
///
/// API payloads and login form keystrokes are summarized so tokens and
/// passwords never reach the log file.
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Api(event) => log::debug!("Action: Api({})", event.describe()),
            Action::Request(request) => {
                log::debug!("Action: Request({})", request.pending().operation())
            }
            Action::LoginForm(_) => log::debug!("Action: LoginForm(..)"),
            Action::Global(GlobalAction::KeyPressed(_)) | Action::None => {}
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}

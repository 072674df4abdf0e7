use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod forms_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod router_middleware;
pub mod session_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the UI thread. Anything slow (network, disk) is
/// spawned as an effect through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state, before this action is reduced
    /// - `dispatcher`: Use to dispatch follow-up actions or spawn effects
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

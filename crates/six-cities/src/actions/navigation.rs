//! Navigation actions

use crate::domain_models::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Request to show a route. Route guards decide what is actually shown.
    Navigate(Route),
    /// The route that is now shown (after guards)
    RouteChanged(Route),
}

//! KeyboardMiddleware - translates key presses into page actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C quits from anywhere.
//!
//! ## Layer 2: Text Input
//! On pages with TEXT_INPUT (login form, focused review form) characters
//! are typed into the form; Enter submits and Esc leaves the form.
//! Ctrl+E on the login page opens the main page on the featured city.
//!
//! ## Layer 3: Page Bindings
//! Everything else is looked up by page capability, so a key only does
//! something on pages that support it.

use crate::actions::{
    Action, ApiRequest, FavoriteAction, GlobalAction, ListAction, LoginFormAction,
    MainPageAction, OffersAction, ReviewFormAction,
};
use crate::capabilities::PageCapabilities;
use crate::dispatcher::Dispatcher;
use crate::domain_models::{City, Route};
use crate::middleware::Middleware;
use crate::selectors::{is_authorized, select_favorites_page_offer, select_main_page_offer};
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use six_cities_client::Offer;
use strum::IntoEnumIterator;

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        let capabilities = PageCapabilities::for_state(state);

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Text input
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            let actions = match state.route {
                Route::Login => Self::login_form_key(key, state),
                _ => Self::review_form_key(key).into_iter().collect(),
            };
            for action in actions {
                dispatcher.dispatch(action);
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Page bindings
        // ═══════════════════════════════════════════════════════════════════

        for action in Self::page_key(key, capabilities, state) {
            dispatcher.dispatch(action);
        }
    }

    fn login_form_key(key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('e') {
            let city = state.login_form.featured_city;
            return vec![
                Action::Offers(OffersAction::ChangeCity(city)),
                Action::navigate(Route::Main),
            ];
        }

        let action = match key.code {
            KeyCode::Esc => return vec![Action::navigate(Route::Main)],
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                LoginFormAction::SwitchField
            }
            KeyCode::Enter => LoginFormAction::Submit,
            KeyCode::Backspace => LoginFormAction::Backspace,
            KeyCode::Char(c) if !has_command_modifier(&key) => LoginFormAction::Input(c),
            _ => return Vec::new(),
        };
        vec![Action::LoginForm(action)]
    }

    fn review_form_key(key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Esc => ReviewFormAction::Blur,
            KeyCode::Enter => ReviewFormAction::Submit,
            KeyCode::Backspace => ReviewFormAction::Backspace,
            KeyCode::Up | KeyCode::Right => ReviewFormAction::RatingUp,
            KeyCode::Down | KeyCode::Left => ReviewFormAction::RatingDown,
            KeyCode::Char(c) if !has_command_modifier(&key) => ReviewFormAction::Input(c),
            _ => return None,
        };
        Some(Action::ReviewForm(action))
    }

    fn page_key(key: KeyEvent, caps: PageCapabilities, state: &AppState) -> Vec<Action> {
        // Global bindings
        match key.code {
            KeyCode::Char('q') => return vec![Action::Global(GlobalAction::Quit)],
            KeyCode::Esc => {
                return match state.route {
                    Route::Main => vec![Action::Global(GlobalAction::Quit)],
                    _ => vec![Action::navigate(Route::Main)],
                };
            }
            KeyCode::Char('F') => return vec![Action::navigate(Route::Favorites)],
            KeyCode::Char('a') => {
                return if is_authorized(&state.user) {
                    vec![Action::Request(ApiRequest::Logout)]
                } else {
                    vec![Action::navigate(Route::Login)]
                };
            }
            KeyCode::Enter if state.route == Route::NotFound => {
                return vec![Action::navigate(Route::Main)];
            }
            _ => {}
        }

        if caps.supports_item_navigation() {
            let list_action = match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(ListAction::Next),
                KeyCode::Char('k') | KeyCode::Up => Some(ListAction::Prev),
                KeyCode::Char('g') | KeyCode::Home => Some(ListAction::First),
                KeyCode::Char('G') | KeyCode::End => Some(ListAction::Last),
                _ => None,
            };
            if let Some(list_action) = list_action {
                return vec![match state.route {
                    Route::Favorites => Action::FavoritesPage(list_action),
                    _ => Action::MainPage(MainPageAction::Cursor(list_action)),
                }];
            }
            if key.code == KeyCode::Enter {
                return Self::focused_offer(state)
                    .map(|offer| vec![Action::navigate(Route::Offer(offer.id))])
                    .unwrap_or_default();
            }
        }

        if caps.contains(PageCapabilities::CITY_TABS) {
            let city = state.offers.city;
            let target = match key.code {
                KeyCode::Char('h') | KeyCode::Left => Some(city.prev()),
                KeyCode::Char('l') | KeyCode::Right => Some(city.next()),
                KeyCode::Char(c @ '1'..='6') => {
                    City::iter().nth(c as usize - '1' as usize)
                }
                _ => None,
            };
            if let Some(target) = target {
                return vec![Action::Offers(OffersAction::ChangeCity(target))];
            }
        }

        if caps.contains(PageCapabilities::SORTING) && key.code == KeyCode::Char('s') {
            return vec![Action::MainPage(MainPageAction::CycleSort)];
        }

        if caps.contains(PageCapabilities::FAVORITE_TOGGLE) && key.code == KeyCode::Char('f') {
            return Self::focused_offer(state)
                .map(|offer| {
                    vec![Action::Favorite(FavoriteAction::Toggle {
                        offer_id: offer.id,
                        is_favorite: offer.is_favorite,
                    })]
                })
                .unwrap_or_default();
        }

        if caps.contains(PageCapabilities::REVIEW) && key.code == KeyCode::Char('w') {
            return if is_authorized(&state.user) {
                vec![Action::ReviewForm(ReviewFormAction::Focus)]
            } else {
                vec![Action::navigate(Route::Login)]
            };
        }

        if caps.contains(PageCapabilities::REFRESH) && key.code == KeyCode::Char('r') {
            return match &state.route {
                Route::Favorites => vec![Action::Request(ApiRequest::FetchFavorites)],
                // Re-entering the route reloads the offer, nearby offers and comments
                Route::Offer(_) => vec![Action::navigate(state.route.clone())],
                _ => vec![Action::Request(ApiRequest::FetchOffers)],
            };
        }

        Vec::new()
    }

    /// Offer the current page is focused on
    fn focused_offer(state: &AppState) -> Option<Offer> {
        match state.route {
            Route::Main => select_main_page_offer(state),
            Route::Favorites => select_favorites_page_offer(state),
            Route::Offer(_) => state.offer.current_offer.clone(),
            _ => None,
        }
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}

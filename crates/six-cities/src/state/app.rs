//! Application State

use super::{
    FavoritesPageState, FavoritesState, LoginFormState, MainPageState, OfferState, OffersState,
    ReviewFormState, StatusBarState, UserState,
};
use crate::domain_models::Route;
use six_cities_theme::Theme;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Page currently shown (after route guards)
    pub route: Route,
    pub offers: OffersState,
    pub user: UserState,
    pub offer: OfferState,
    pub favorites: FavoritesState,
    pub main_page: MainPageState,
    pub favorites_page: FavoritesPageState,
    pub login_form: LoginFormState,
    pub review_form: ReviewFormState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            route: Route::default(),
            offers: OffersState::default(),
            user: UserState::default(),
            offer: OfferState::default(),
            favorites: FavoritesState::default(),
            main_page: MainPageState::default(),
            favorites_page: FavoritesPageState::default(),
            login_form: LoginFormState::default(),
            review_form: ReviewFormState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
        }
    }
}

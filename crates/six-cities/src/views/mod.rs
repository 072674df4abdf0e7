use crate::capabilities::PageCapabilities;
use crate::domain_models::Route;
use crate::keymap::hints_for;
use crate::selectors::Selectors;
use crate::state::AppState;
use crate::view_models::{
    FavoritesPageViewModel, HeaderViewModel, LoginPageViewModel, MainPageViewModel,
    OfferPageViewModel, StatusBarViewModel,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod favorites_page_view;
pub mod header_view;
pub mod key_hints_view;
pub mod login_page_view;
pub mod main_page_view;
pub mod map_view;
pub mod not_found_view;
pub mod offer_card_view;
pub mod offer_page_view;
pub mod status_bar;

/// Render the entire application UI
pub fn render(state: &AppState, selectors: &Selectors, area: Rect, f: &mut Frame) {
    let [header, body, hints, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let header_vm = HeaderViewModel::from_state(state);
    f.render_widget(header_view::HeaderWidget(&header_vm, &state.theme), header);

    match &state.route {
        Route::Main => {
            let vm = MainPageViewModel::from_state(state, selectors);
            main_page_view::render(&vm, &state.theme, body, f);
        }
        Route::Offer(_) => {
            let vm = OfferPageViewModel::from_state(state, selectors);
            offer_page_view::render(&vm, &state.theme, body, f);
        }
        Route::Favorites => {
            let vm = FavoritesPageViewModel::from_state(state, selectors);
            favorites_page_view::render(&vm, &state.theme, body, f);
        }
        Route::Login => {
            let vm = LoginPageViewModel::from_state(&state.login_form);
            login_page_view::render(&vm, &state.theme, body, f);
        }
        Route::NotFound => not_found_view::render(&state.theme, body, f),
    }

    let key_hints = hints_for(
        PageCapabilities::for_state(state),
        state.review_form.is_focused,
    );
    f.render_widget(key_hints_view::KeyHintsWidget(&key_hints, &state.theme), hints);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(status_bar::StatusBarWidget(&status_vm), status);
}

use super::{
    favorites_reducer, forms_reducer, offer_reducer, offers_reducer, pages_reducer,
    status_bar_reducer, user_reducer,
};
use crate::actions::{Action, GlobalAction, NavigationAction, OffersAction};
use crate::domain_models::Route;
use crate::selectors::select_offers_by_city;
use crate::state::{AppState, LoginFormState, ReviewFormState};

/// Root reducer - produces the next state from the current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Navigation(NavigationAction::RouteChanged(route)) => {
            if state.route != *route {
                // Forms belong to the page they are on
                if state.route == Route::Login {
                    state.login_form = LoginFormState::default();
                }
                state.review_form = ReviewFormState::default();
            }
            state.route = route.clone();
        }
        Action::Offers(OffersAction::ChangeCity(_)) => {
            state.main_page.cursor = 0;
        }
        Action::MainPage(page_action) => {
            let visible = select_offers_by_city(&state.offers).len();
            state.main_page = pages_reducer::reduce_main_page(state.main_page, page_action, visible);
        }
        Action::FavoritesPage(list_action) => {
            let count = state.favorites.favorites.len();
            state.favorites_page =
                pages_reducer::reduce_favorites_page(state.favorites_page, list_action, count);
        }
        _ => {}
    }

    // Slice reducers
    state.offers = offers_reducer::reduce(state.offers, action);
    state.user = user_reducer::reduce(state.user, action);
    state.offer = offer_reducer::reduce(state.offer, action);
    state.favorites = favorites_reducer::reduce(state.favorites, action);
    state.login_form = forms_reducer::reduce_login_form(state.login_form, action);
    state.review_form =
        forms_reducer::reduce_review_form(state.review_form, action, state.route.offer_id());
    state.status_bar = status_bar_reducer::reduce(state.status_bar, action);

    state
}

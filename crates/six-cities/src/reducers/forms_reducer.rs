//! Login and review form reducers

use crate::actions::{Action, ApiEvent, Lifecycle, LoginField, LoginFormAction, ReviewFormAction};
use crate::state::{LoginFormState, ReviewFormState};
use six_cities_client::OfferId;

pub fn reduce_login_form(mut state: LoginFormState, action: &Action) -> LoginFormState {
    match action {
        Action::LoginForm(form_action) => match form_action {
            LoginFormAction::Input(c) => focused_field(&mut state).push(*c),
            LoginFormAction::Backspace => {
                focused_field(&mut state).pop();
            }
            LoginFormAction::SwitchField => state.focus = state.focus.other(),
            LoginFormAction::Submit => {}
            LoginFormAction::FeatureCity(city) => state.featured_city = *city,
        },
        // Never keep the password around once it was accepted
        Action::Api(ApiEvent::Login(Lifecycle::Fulfilled(_))) => {
            state = LoginFormState::default();
        }
        _ => {}
    }
    state
}

fn focused_field(state: &mut LoginFormState) -> &mut String {
    match state.focus {
        LoginField::Email => &mut state.credentials.email,
        LoginField::Password => &mut state.credentials.password,
    }
}

/// Review form of the offer page for `current_offer`
///
/// Post results for any other offer leave the form alone.
pub fn reduce_review_form(
    mut state: ReviewFormState,
    action: &Action,
    current_offer: Option<&OfferId>,
) -> ReviewFormState {
    match action {
        Action::ReviewForm(form_action) => match form_action {
            ReviewFormAction::Focus => state.is_focused = true,
            ReviewFormAction::Blur => state.is_focused = false,
            ReviewFormAction::Input(c) if !state.is_submitting => state.draft.push_char(*c),
            ReviewFormAction::Backspace if !state.is_submitting => state.draft.pop_char(),
            ReviewFormAction::RatingUp if !state.is_submitting => state.draft.increase_rating(),
            ReviewFormAction::RatingDown if !state.is_submitting => {
                state.draft.decrease_rating()
            }
            _ => {}
        },
        Action::Api(ApiEvent::PostComment { offer_id, result })
            if current_offer == Some(offer_id) =>
        {
            match result {
            Lifecycle::Pending => state.is_submitting = true,
            Lifecycle::Fulfilled(_) => state = ReviewFormState::default(),
            // Keep the draft so the user can retry
            Lifecycle::Rejected(_) => state.is_submitting = false,
            }
        }
        _ => {}
    }
    state
}

use crate::domain_models::review_draft::{MAX_REVIEW_LENGTH, MIN_REVIEW_LENGTH};
use crate::domain_models::{rating_title, MAX_RATING};
use crate::state::ReviewFormState;

/// Review form shown under the reviews of an offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormViewModel {
    pub text: String,
    /// "57/300"
    pub counter: String,
    /// Filled and empty stars for the chosen rating
    pub rating_stars: String,
    pub rating_title: &'static str,
    pub hint: String,
    pub can_submit: bool,
    pub is_submitting: bool,
    pub is_focused: bool,
}

impl ReviewFormViewModel {
    pub fn from_state(form: &ReviewFormState) -> Self {
        let draft = &form.draft;
        let filled = draft.rating.min(MAX_RATING) as usize;
        Self {
            text: draft.comment.clone(),
            counter: format!("{}/{}", draft.comment_length(), MAX_REVIEW_LENGTH),
            rating_stars: format!(
                "{}{}",
                "★".repeat(filled),
                "☆".repeat(MAX_RATING as usize - filled)
            ),
            rating_title: rating_title(draft.rating).unwrap_or("not rated"),
            hint: format!(
                "To submit review please make sure to set rating and describe your stay with at least {} characters.",
                MIN_REVIEW_LENGTH
            ),
            can_submit: form.can_submit(),
            is_submitting: form.is_submitting,
            is_focused: form.is_focused,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}

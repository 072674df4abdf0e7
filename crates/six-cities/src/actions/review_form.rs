//! Review form actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFormAction {
    /// Start editing the review
    Focus,
    /// Stop editing (keeps the draft)
    Blur,
    Input(char),
    Backspace,
    RatingUp,
    RatingDown,
    /// Post the review (only when valid and not already posting)
    Submit,
}

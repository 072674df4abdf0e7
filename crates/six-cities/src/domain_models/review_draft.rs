//! Review form draft
//!
//! A review needs a rating from 1 to 5 and between 50 and 300 characters of
//! text before it can be posted.

use six_cities_client::CommentPayload;

pub const MIN_REVIEW_LENGTH: usize = 50;
pub const MAX_REVIEW_LENGTH: usize = 300;
pub const MAX_RATING: u8 = 5;

const RATING_TITLES: [&str; MAX_RATING as usize] = ["terrible", "bad", "okay", "good", "excellent"];

/// Title shown next to a star value (1 = terrible .. 5 = excellent)
pub fn rating_title(rating: u8) -> Option<&'static str> {
    RATING_TITLES.get((rating as usize).checked_sub(1)?).copied()
}

/// Review text and rating being edited on the offer page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub comment: String,
    /// 0 means no rating picked yet
    pub rating: u8,
}

impl ReviewDraft {
    pub fn comment_length(&self) -> usize {
        self.comment.chars().count()
    }

    pub fn has_valid_length(&self) -> bool {
        (MIN_REVIEW_LENGTH..=MAX_REVIEW_LENGTH).contains(&self.comment_length())
    }

    pub fn has_valid_rating(&self) -> bool {
        (1..=MAX_RATING).contains(&self.rating)
    }

    pub fn is_valid(&self) -> bool {
        self.has_valid_length() && self.has_valid_rating()
    }

    /// Request body, or None while the draft is invalid
    pub fn to_payload(&self) -> Option<CommentPayload> {
        self.is_valid().then(|| CommentPayload {
            comment: self.comment.clone(),
            rating: self.rating,
        })
    }

    /// Raise the rating by one star (max 5)
    pub fn increase_rating(&mut self) {
        self.rating = (self.rating + 1).min(MAX_RATING);
    }

    /// Lower the rating by one star (min 1 once a rating was picked)
    pub fn decrease_rating(&mut self) {
        self.rating = self.rating.saturating_sub(1).max(1);
    }

    /// Append a character unless the text is already at the maximum length
    pub fn push_char(&mut self, c: char) {
        if self.comment_length() < MAX_REVIEW_LENGTH {
            self.comment.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.comment.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(len: usize, rating: u8) -> ReviewDraft {
        ReviewDraft {
            comment: "x".repeat(len),
            rating,
        }
    }

    #[test]
    fn test_length_bounds() {
        assert!(!draft(49, 4).is_valid());
        assert!(draft(50, 4).is_valid());
        assert!(draft(300, 4).is_valid());
        assert!(!draft(301, 4).is_valid());
    }

    #[test]
    fn test_rating_required() {
        assert!(!draft(60, 0).is_valid());
        assert!(draft(60, 1).is_valid());
        assert!(draft(60, 5).is_valid());
        assert!(!draft(60, 6).is_valid());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let d = ReviewDraft {
            comment: "é".repeat(50),
            rating: 3,
        };
        assert_eq!(d.comment_length(), 50);
        assert!(d.is_valid());
    }

    #[test]
    fn test_payload_only_when_valid() {
        assert!(draft(10, 3).to_payload().is_none());
        let payload = draft(55, 3).to_payload().unwrap();
        assert_eq!(payload.rating, 3);
        assert_eq!(payload.comment.len(), 55);
    }

    #[test]
    fn test_rating_titles() {
        assert_eq!(rating_title(0), None);
        assert_eq!(rating_title(1), Some("terrible"));
        assert_eq!(rating_title(5), Some("excellent"));
        assert_eq!(rating_title(6), None);
    }

    #[test]
    fn test_rating_steps() {
        let mut d = ReviewDraft::default();
        d.decrease_rating();
        assert_eq!(d.rating, 1);
        for _ in 0..10 {
            d.increase_rating();
        }
        assert_eq!(d.rating, 5);
    }

    #[test]
    fn test_push_char_stops_at_max() {
        let mut d = draft(MAX_REVIEW_LENGTH, 0);
        d.push_char('y');
        assert_eq!(d.comment_length(), MAX_REVIEW_LENGTH);
        d.pop_char();
        d.push_char('y');
        assert!(d.comment.ends_with('y'));
    }
}

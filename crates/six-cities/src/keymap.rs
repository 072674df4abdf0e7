//! Key bindings shown in the hint bar

use crate::capabilities::PageCapabilities;

/// A key and what it does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub description: &'static str,
    /// Shown only when the page has all of these capabilities
    pub requires: PageCapabilities,
}

const fn hint(key: &'static str, description: &'static str, requires: PageCapabilities) -> KeyHint {
    KeyHint {
        key,
        description,
        requires,
    }
}

const BROWSE_HINTS: &[KeyHint] = &[
    hint("h/l", "city", PageCapabilities::CITY_TABS),
    hint("j/k", "move", PageCapabilities::ITEM_NAVIGATION),
    hint("Enter", "open", PageCapabilities::ITEM_NAVIGATION),
    hint("s", "sort", PageCapabilities::SORTING),
    hint("f", "favorite", PageCapabilities::FAVORITE_TOGGLE),
    hint("w", "write review", PageCapabilities::REVIEW),
    hint("r", "reload", PageCapabilities::REFRESH),
    hint("F", "favorites", PageCapabilities::empty()),
    hint("a", "sign in/out", PageCapabilities::empty()),
    hint("Esc", "back", PageCapabilities::empty()),
    hint("q", "quit", PageCapabilities::empty()),
];

const LOGIN_HINTS: &[KeyHint] = &[
    hint("Tab", "switch field", PageCapabilities::TEXT_INPUT),
    hint("Enter", "sign in", PageCapabilities::TEXT_INPUT),
    hint("Ctrl+E", "explore city", PageCapabilities::TEXT_INPUT),
    hint("Esc", "back", PageCapabilities::TEXT_INPUT),
];

const REVIEW_HINTS: &[KeyHint] = &[
    hint("↑/↓", "rating", PageCapabilities::TEXT_INPUT),
    hint("Enter", "submit", PageCapabilities::TEXT_INPUT),
    hint("Esc", "stop editing", PageCapabilities::TEXT_INPUT),
];

/// Hints for a page. `editing_review` picks the review form bindings when
/// the page takes text input.
pub fn hints_for(capabilities: PageCapabilities, editing_review: bool) -> Vec<KeyHint> {
    let table = match (capabilities.accepts_text_input(), editing_review) {
        (true, true) => REVIEW_HINTS,
        (true, false) => LOGIN_HINTS,
        (false, _) => BROWSE_HINTS,
    };
    table
        .iter()
        .filter(|h| capabilities.contains(h.requires))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page_shows_global_hints_only() {
        let hints = hints_for(PageCapabilities::empty(), false);
        let keys: Vec<&str> = hints.iter().map(|h| h.key).collect();
        assert_eq!(keys, vec!["F", "a", "Esc", "q"]);
    }

    #[test]
    fn test_login_hints_offer_city_shortcut() {
        let hints = hints_for(PageCapabilities::TEXT_INPUT, false);
        assert!(hints.iter().any(|h| h.key == "Ctrl+E"));
    }

    #[test]
    fn test_review_hints() {
        let hints = hints_for(PageCapabilities::TEXT_INPUT, true);
        assert_eq!(hints.len(), 3);
        assert_eq!(hints[0].description, "rating");
    }
}

//! Page capabilities
//!
//! Each page declares what kind of input it accepts. The keyboard middleware
//! routes keys by capability, and the key hint bar lists only the bindings
//! the current page supports.

use crate::domain_models::Route;
use crate::state::AppState;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PageCapabilities: u32 {
        /// Characters go to a text field instead of key bindings
        const TEXT_INPUT = 1 << 0;

        /// A list of offers with a cursor (j/k, Enter opens)
        const ITEM_NAVIGATION = 1 << 1;

        /// City tabs can be switched (h/l, 1-6)
        const CITY_TABS = 1 << 2;

        /// The list can be re-sorted
        const SORTING = 1 << 3;

        /// Some offer is focused and can be (un)favorited
        const FAVORITE_TOGGLE = 1 << 4;

        /// A review can be written
        const REVIEW = 1 << 5;

        /// Data on the page can be reloaded
        const REFRESH = 1 << 6;
    }
}

impl PageCapabilities {
    /// Capabilities of the page currently shown
    pub fn for_state(state: &AppState) -> Self {
        match &state.route {
            Route::Main => {
                Self::ITEM_NAVIGATION
                    | Self::CITY_TABS
                    | Self::SORTING
                    | Self::FAVORITE_TOGGLE
                    | Self::REFRESH
            }
            Route::Favorites => Self::ITEM_NAVIGATION | Self::FAVORITE_TOGGLE | Self::REFRESH,
            Route::Login => Self::TEXT_INPUT,
            Route::Offer(_) if state.review_form.is_focused => Self::TEXT_INPUT,
            Route::Offer(_) => Self::FAVORITE_TOGGLE | Self::REVIEW | Self::REFRESH,
            Route::NotFound => Self::empty(),
        }
    }

    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PageCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

//! Page-local UI state

use crate::domain_models::SortOption;

/// Main page: sort option and the offer under the cursor
#[derive(Debug, Clone, Default)]
pub struct MainPageState {
    pub sort: SortOption,
    pub cursor: usize,
}

/// Favorites page: offer under the cursor (in display order)
#[derive(Debug, Clone, Default)]
pub struct FavoritesPageState {
    pub cursor: usize,
}

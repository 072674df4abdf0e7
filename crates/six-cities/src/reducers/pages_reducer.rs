//! Page-local reducers (sort option and list cursors)

use crate::actions::{ListAction, MainPageAction};
use crate::state::{FavoritesPageState, MainPageState};

/// Move a cursor within a list of `len` items
fn move_cursor(cursor: usize, action: ListAction, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match action {
        ListAction::Next => (cursor + 1).min(last),
        ListAction::Prev => cursor.saturating_sub(1).min(last),
        ListAction::First => 0,
        ListAction::Last => last,
    }
}

/// `visible_count` is the number of offers listed for the active city
pub fn reduce_main_page(
    mut state: MainPageState,
    action: &MainPageAction,
    visible_count: usize,
) -> MainPageState {
    match action {
        MainPageAction::Cursor(list_action) => {
            state.cursor = move_cursor(state.cursor, *list_action, visible_count);
        }
        MainPageAction::CycleSort => {
            state.sort = state.sort.next();
            state.cursor = 0;
        }
    }
    state
}

pub fn reduce_favorites_page(
    mut state: FavoritesPageState,
    action: &ListAction,
    favorites_count: usize,
) -> FavoritesPageState {
    state.cursor = move_cursor(state.cursor, *action, favorites_count);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::SortOption;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = MainPageState::default();
        for _ in 0..5 {
            state = reduce_main_page(state, &MainPageAction::Cursor(ListAction::Next), 3);
        }
        assert_eq!(state.cursor, 2);
        state = reduce_main_page(state, &MainPageAction::Cursor(ListAction::First), 3);
        state = reduce_main_page(state, &MainPageAction::Cursor(ListAction::Prev), 3);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_empty_list_keeps_cursor_at_zero() {
        let state = reduce_main_page(
            MainPageState::default(),
            &MainPageAction::Cursor(ListAction::Last),
            0,
        );
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_sort_change_resets_cursor() {
        let state = MainPageState {
            cursor: 4,
            ..Default::default()
        };
        let state = reduce_main_page(state, &MainPageAction::CycleSort, 10);
        assert_eq!(state.sort, SortOption::PriceLowToHigh);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_favorites_cursor() {
        let state = reduce_favorites_page(FavoritesPageState::default(), &ListAction::Last, 4);
        assert_eq!(state.cursor, 3);
        let state = reduce_favorites_page(state, &ListAction::Next, 2);
        assert_eq!(state.cursor, 1);
    }
}

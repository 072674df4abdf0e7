//! Main page and list cursor actions

/// Cursor movement in a list of offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Next,
    Prev,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainPageAction {
    Cursor(ListAction),
    /// Cycle to the next sort option
    CycleSort,
}

//! Application state
//!
//! Four data slices mirror the server (`offers`, `user`, `offer`,
//! `favorites`). The remaining fields hold page and form state.
//!
//! Collections shared with selectors live behind `Arc`. Reducers always
//! install a fresh `Arc` when a collection changes, so memoized selectors can
//! compare inputs by pointer.

mod app;
mod favorites;
mod forms;
mod offer;
mod offers;
mod pages;
mod status_bar;
mod user;

pub use app::AppState;
pub use favorites::FavoritesState;
pub use forms::{LoginFormState, ReviewFormState};
pub use offer::OfferState;
pub use offers::OffersState;
pub use pages::{FavoritesPageState, MainPageState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
pub use user::UserState;

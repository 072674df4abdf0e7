//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod authorization;
pub mod city;
pub mod credentials;
pub mod limits;
pub mod rating;
pub mod review_draft;
pub mod route;
pub mod sort_option;

pub use authorization::AuthorizationStatus;
pub use city::City;
pub use credentials::LoginCredentials;
pub use limits::{MAX_COMMENTS, MAX_GALLERY_IMAGES, MAX_NEARBY_OFFERS};
pub use review_draft::{rating_title, ReviewDraft, MAX_RATING};
pub use route::Route;
pub use sort_option::SortOption;

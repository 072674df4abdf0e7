//! View models
//!
//! Pre-computed display data for the views. Views only lay out and style
//! what a view model hands them.

pub mod favorites_page;
pub mod header;
pub mod login_page;
pub mod main_page;
pub mod map;
pub mod offer_card;
pub mod offer_page;
pub mod review_form;
pub mod status_bar;

pub use favorites_page::FavoritesPageViewModel;
pub use header::HeaderViewModel;
pub use login_page::LoginPageViewModel;
pub use main_page::MainPageViewModel;
pub use map::MapViewModel;
pub use offer_card::OfferCardViewModel;
pub use offer_page::{OfferDetailsViewModel, OfferPageViewModel};
pub use review_form::ReviewFormViewModel;
pub use status_bar::StatusBarViewModel;

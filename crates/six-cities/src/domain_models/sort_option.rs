//! Sort options for the offer list

use six_cities_client::Offer;
use strum::{Display, EnumIter};

/// How the main page orders the offers of the active city
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SortOption {
    /// Server order
    #[default]
    #[strum(to_string = "Popular")]
    Popular,
    #[strum(to_string = "Price: low to high")]
    PriceLowToHigh,
    #[strum(to_string = "Price: high to low")]
    PriceHighToLow,
    #[strum(to_string = "Top rated first")]
    TopRatedFirst,
}

impl SortOption {
    /// Cycle to the next sort option
    pub fn next(&self) -> Self {
        match self {
            SortOption::Popular => SortOption::PriceLowToHigh,
            SortOption::PriceLowToHigh => SortOption::PriceHighToLow,
            SortOption::PriceHighToLow => SortOption::TopRatedFirst,
            SortOption::TopRatedFirst => SortOption::Popular,
        }
    }

    /// Sort in place. The sort is stable so equal keys keep server order.
    pub fn apply(&self, offers: &mut [Offer]) {
        match self {
            SortOption::Popular => {}
            SortOption::PriceLowToHigh => offers.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOption::PriceHighToLow => offers.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOption::TopRatedFirst => offers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

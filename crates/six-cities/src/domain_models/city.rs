//! City model
//!
//! The app only knows six cities. Their map centres are fixed and do not
//! come from the server.

use rand::seq::IteratorRandom;
use six_cities_client::Location;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Zoom level used for every city map
pub const CITY_ZOOM: u8 = 12;

/// One of the six supported cities
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum City {
    #[default]
    Paris,
    Cologne,
    Brussels,
    Amsterdam,
    Hamburg,
    Dusseldorf,
}

impl City {
    /// City name as the server spells it in `offer.city.name`
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Map centre of the city
    pub fn location(&self) -> Location {
        let (latitude, longitude) = match self {
            City::Paris => (48.85661, 2.351499),
            City::Cologne => (50.938361, 6.959974),
            City::Brussels => (50.846557, 4.351697),
            City::Amsterdam => (52.37454, 4.897976),
            City::Hamburg => (53.550341, 10.000654),
            City::Dusseldorf => (51.225402, 6.776314),
        };
        Location {
            latitude,
            longitude,
            zoom: Some(CITY_ZOOM),
        }
    }

    /// Position of this city in the tab order
    pub fn index(&self) -> usize {
        City::iter().position(|c| c == *self).unwrap_or(0)
    }

    /// Next city in tab order (wraps)
    pub fn next(&self) -> Self {
        let cities: Vec<City> = City::iter().collect();
        cities[(self.index() + 1) % cities.len()]
    }

    /// Any of the six, picked at random
    pub fn random() -> Self {
        City::iter().choose(&mut rand::rng()).unwrap_or_default()
    }

    /// Previous city in tab order (wraps)
    pub fn prev(&self) -> Self {
        let cities: Vec<City> = City::iter().collect();
        cities[(self.index() + cities.len() - 1) % cities.len()]
    }
}

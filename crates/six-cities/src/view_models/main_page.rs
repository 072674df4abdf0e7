//! Main page view model: city tabs, sorted offer list and the city map

use super::map::MapViewModel;
use super::offer_card::OfferCardViewModel;
use crate::domain_models::{City, SortOption};
use crate::selectors::Selectors;
use crate::state::AppState;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq)]
pub struct MainPageViewModel {
    pub tabs: Vec<&'static str>,
    pub selected_tab: usize,
    /// "3 places to stay in Amsterdam"
    pub heading: String,
    pub sort_label: String,
    pub cards: Vec<OfferCardViewModel>,
    pub selected: Option<usize>,
    pub is_loading: bool,
    /// Shown instead of the list when the city has no offers
    pub empty_message: Option<String>,
    pub map: MapViewModel,
}

impl MainPageViewModel {
    pub fn from_state(state: &AppState, selectors: &Selectors) -> Self {
        let city = state.offers.city;
        let offers = selectors.sorted_offers(state);
        let selected = offers
            .len()
            .checked_sub(1)
            .map(|last| state.main_page.cursor.min(last));

        let cards: Vec<OfferCardViewModel> = offers
            .iter()
            .enumerate()
            .map(|(i, o)| OfferCardViewModel::from_offer(o, Some(i) == selected))
            .collect();

        let active = selected.and_then(|i| offers.get(i)).map(|o| &o.id);
        let map = MapViewModel::new(city.location(), offers.iter(), active);

        let empty_message = (cards.is_empty() && !state.offers.is_offers_loading).then(|| {
            format!(
                "No places to stay available. We could not find any property available at the moment in {}",
                city
            )
        });

        Self {
            tabs: City::iter().map(|c| c.name()).collect(),
            selected_tab: city.index(),
            heading: places_heading(cards.len(), city),
            sort_label: sort_label(state.main_page.sort),
            cards,
            selected,
            is_loading: state.offers.is_offers_loading,
            empty_message,
            map,
        }
    }
}

fn places_heading(count: usize, city: City) -> String {
    let noun = if count == 1 { "place" } else { "places" };
    format!("{} {} to stay in {}", count, noun, city)
}

fn sort_label(sort: SortOption) -> String {
    format!("Sort by: {}", sort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::offer;
    use std::sync::Arc;

    fn state_with(offers: Vec<six_cities_client::Offer>) -> AppState {
        let mut state = AppState::default();
        state.offers.offers = Arc::new(offers);
        state
    }

    #[test]
    fn test_heading_counts_city_offers_only() {
        let state = state_with(vec![
            offer("1", "Paris"),
            offer("2", "Paris"),
            offer("3", "Hamburg"),
        ]);
        let vm = MainPageViewModel::from_state(&state, &Selectors::default());

        assert_eq!(vm.heading, "2 places to stay in Paris");
        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.selected, Some(0));
        assert_eq!(vm.map.points.len(), 2);
        assert!(vm.empty_message.is_none());
    }

    #[test]
    fn test_cursor_is_clamped_and_marked_on_map() {
        let mut state = state_with(vec![offer("1", "Paris"), offer("2", "Paris")]);
        state.main_page.cursor = 10;
        let vm = MainPageViewModel::from_state(&state, &Selectors::default());

        assert_eq!(vm.selected, Some(1));
        assert!(vm.cards[1].is_selected);
        assert_eq!(vm.map.active_coords().len(), 1);
    }

    #[test]
    fn test_empty_city_message() {
        let state = state_with(vec![offer("1", "Hamburg")]);
        let vm = MainPageViewModel::from_state(&state, &Selectors::default());

        assert_eq!(vm.selected, None);
        assert!(vm
            .empty_message
            .as_deref()
            .is_some_and(|m| m.ends_with("in Paris")));
    }

    #[test]
    fn test_no_empty_message_while_loading() {
        let mut state = state_with(Vec::new());
        state.offers.is_offers_loading = true;
        let vm = MainPageViewModel::from_state(&state, &Selectors::default());
        assert!(vm.is_loading);
        assert!(vm.empty_message.is_none());
    }

    #[test]
    fn test_singular_heading() {
        assert_eq!(places_heading(1, City::Dusseldorf), "1 place to stay in Dusseldorf");
    }
}

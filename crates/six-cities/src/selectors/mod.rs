//! Selectors
//!
//! Pure functions that derive view data from the state. They never perform
//! I/O and never panic; absent data yields empty collections.
//!
//! `Selectors` wraps the expensive ones in single-entry memos for the render
//! loop, which calls them on every frame.

mod memo;

pub use memo::{ArcKey, Memo};

use crate::domain_models::{City, SortOption, MAX_COMMENTS, MAX_GALLERY_IMAGES, MAX_NEARBY_OFFERS};
use crate::state::{AppState, FavoritesState, OfferState, OffersState, UserState};
use six_cities_client::{Offer, Review};
use std::cmp::Ordering;
use std::sync::Arc;

/// Favorites of one city
#[derive(Debug, Clone, PartialEq)]
pub struct CityGroup {
    pub city: String,
    pub offers: Vec<Offer>,
}

/// Offers located in the active city, in server order
pub fn select_offers_by_city(offers: &OffersState) -> Vec<Offer> {
    offers
        .offers
        .iter()
        .filter(|o| o.city.name == offers.city.name())
        .cloned()
        .collect()
}

/// Offers of the active city in the chosen order
pub fn select_sorted_offers(offers: &OffersState, sort: SortOption) -> Vec<Offer> {
    let mut city_offers = select_offers_by_city(offers);
    sort.apply(&mut city_offers);
    city_offers
}

pub fn select_favorite_count(favorites: &FavoritesState) -> usize {
    favorites.favorites.len()
}

/// Newest first (stable), at most ten. Unparsable dates go last.
pub fn select_sorted_comments(comments: &[Review]) -> Vec<Review> {
    let mut sorted: Vec<(Option<chrono::DateTime<chrono::Utc>>, &Review)> =
        comments.iter().map(|r| (r.parsed_date(), r)).collect();
    sorted.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
        .into_iter()
        .take(MAX_COMMENTS)
        .map(|(_, r)| r.clone())
        .collect()
}

pub fn select_nearby_offers(offer: &OfferState) -> Vec<Offer> {
    offer
        .nearby_offers
        .iter()
        .take(MAX_NEARBY_OFFERS)
        .cloned()
        .collect()
}

pub fn select_gallery_images(offer: &Offer) -> &[String] {
    &offer.images[..offer.images.len().min(MAX_GALLERY_IMAGES)]
}

/// Favorites grouped by city name, groups in order of first appearance
pub fn select_favorites_by_city(favorites: &[Offer]) -> Vec<CityGroup> {
    let mut groups: Vec<CityGroup> = Vec::new();
    for offer in favorites {
        match groups.iter_mut().find(|g| g.city == offer.city.name) {
            Some(group) => group.offers.push(offer.clone()),
            None => groups.push(CityGroup {
                city: offer.city.name.clone(),
                offers: vec![offer.clone()],
            }),
        }
    }
    groups
}

/// Favorites flattened in the order the favorites page lists them
pub fn select_favorites_in_display_order(favorites: &[Offer]) -> Vec<Offer> {
    select_favorites_by_city(favorites)
        .into_iter()
        .flat_map(|g| g.offers)
        .collect()
}

pub fn is_authorized(user: &UserState) -> bool {
    user.authorization_status.is_auth()
}

/// Offer under the main page cursor
pub fn select_main_page_offer(state: &AppState) -> Option<Offer> {
    let offers = select_sorted_offers(&state.offers, state.main_page.sort);
    let cursor = state.main_page.cursor.min(offers.len().checked_sub(1)?);
    offers.into_iter().nth(cursor)
}

/// Offer under the favorites page cursor
pub fn select_favorites_page_offer(state: &AppState) -> Option<Offer> {
    let offers = select_favorites_in_display_order(&state.favorites.favorites);
    let cursor = state.favorites_page.cursor.min(offers.len().checked_sub(1)?);
    offers.into_iter().nth(cursor)
}

/// Memoized selectors used by the render loop
#[derive(Default)]
pub struct Selectors {
    sorted_offers: Memo<(ArcKey<Vec<Offer>>, City, SortOption), Arc<Vec<Offer>>>,
    sorted_comments: Memo<ArcKey<Vec<Review>>, Arc<Vec<Review>>>,
    favorites_by_city: Memo<ArcKey<Vec<Offer>>, Arc<Vec<CityGroup>>>,
}

impl Selectors {
    pub fn sorted_offers(&self, state: &AppState) -> Arc<Vec<Offer>> {
        let key = (
            ArcKey::new(&state.offers.offers),
            state.offers.city,
            state.main_page.sort,
        );
        self.sorted_offers.get(key, |_| {
            Arc::new(select_sorted_offers(&state.offers, state.main_page.sort))
        })
    }

    pub fn sorted_comments(&self, state: &AppState) -> Arc<Vec<Review>> {
        self.sorted_comments
            .get(ArcKey::new(&state.offer.comments), |key| {
                Arc::new(select_sorted_comments(&key.0))
            })
    }

    pub fn favorites_by_city(&self, state: &AppState) -> Arc<Vec<CityGroup>> {
        self.favorites_by_city
            .get(ArcKey::new(&state.favorites.favorites), |key| {
                Arc::new(select_favorites_by_city(&key.0))
            })
    }
}

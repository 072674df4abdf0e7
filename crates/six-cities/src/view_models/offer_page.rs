//! Offer detail page view model

use super::map::MapViewModel;
use super::offer_card::{capitalize, OfferCardViewModel};
use super::review_form::ReviewFormViewModel;
use crate::domain_models::rating::stars_text;
use crate::selectors::{is_authorized, select_gallery_images, select_nearby_offers, Selectors};
use crate::state::AppState;
use six_cities_client::{Offer, Review};

#[derive(Debug, Clone, PartialEq)]
pub enum OfferPageViewModel {
    Loading,
    NotFound,
    Loaded(Box<OfferDetailsViewModel>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferDetailsViewModel {
    pub title: String,
    pub is_premium: bool,
    pub is_favorite: bool,
    pub stars: String,
    /// Numeric rating, e.g. "4.8"
    pub rating: String,
    /// Kind, bedrooms and adults, whichever are known
    pub features: Vec<String>,
    pub price: String,
    pub gallery: Vec<String>,
    pub goods: Vec<String>,
    pub host: Option<HostViewModel>,
    pub description: Option<String>,
    pub reviews: Vec<ReviewViewModel>,
    pub review_count: usize,
    /// Present only for signed-in users
    pub review_form: Option<ReviewFormViewModel>,
    pub nearby: Vec<OfferCardViewModel>,
    pub map: MapViewModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostViewModel {
    pub name: String,
    pub is_pro: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewViewModel {
    pub author: String,
    pub stars: String,
    /// "April 2019"; the raw value when the date can't be parsed
    pub date: String,
    pub comment: String,
}

impl ReviewViewModel {
    pub fn from_review(review: &Review) -> Self {
        Self {
            author: review.user.name.clone(),
            stars: stars_text(review.rating),
            date: review
                .parsed_date()
                .map(|d| d.format("%B %Y").to_string())
                .unwrap_or_else(|| review.date.clone()),
            comment: review.comment.clone(),
        }
    }
}

impl OfferPageViewModel {
    pub fn from_state(state: &AppState, selectors: &Selectors) -> Self {
        if state.offer.is_offer_not_found {
            return Self::NotFound;
        }
        let wanted = state.route.offer_id();
        let offer = match &state.offer.current_offer {
            Some(offer) if !state.offer.is_offer_loading && Some(&offer.id) == wanted => offer,
            _ => return Self::Loading,
        };

        let comments = selectors.sorted_comments(state);
        let nearby = select_nearby_offers(&state.offer);
        let map = MapViewModel::new(
            offer.city.location,
            std::iter::once(offer).chain(nearby.iter()),
            Some(&offer.id),
        );

        Self::Loaded(Box::new(OfferDetailsViewModel {
            title: offer.title.clone(),
            is_premium: offer.is_premium,
            is_favorite: offer.is_favorite,
            stars: stars_text(offer.rating),
            rating: format!("{:.1}", offer.rating),
            features: features(offer),
            price: format!("€{} / night", offer.price),
            gallery: select_gallery_images(offer).to_vec(),
            goods: offer.goods.clone(),
            host: offer.host.as_ref().map(|h| HostViewModel {
                name: h.name.clone(),
                is_pro: h.is_pro,
            }),
            description: offer.description.clone(),
            reviews: comments.iter().map(ReviewViewModel::from_review).collect(),
            review_count: state.offer.comments.len(),
            review_form: is_authorized(&state.user)
                .then(|| ReviewFormViewModel::from_state(&state.review_form)),
            nearby: nearby
                .iter()
                .map(|o| OfferCardViewModel::from_offer(o, false))
                .collect(),
            map,
        }))
    }
}

fn features(offer: &Offer) -> Vec<String> {
    let mut out = vec![capitalize(&offer.kind)];
    if let Some(bedrooms) = offer.bedrooms {
        let noun = if bedrooms == 1 { "Bedroom" } else { "Bedrooms" };
        out.push(format!("{} {}", bedrooms, noun));
    }
    if let Some(adults) = offer.max_adults {
        let noun = if adults == 1 { "adult" } else { "adults" };
        out.push(format!("Max {} {}", adults, noun));
    }
    out
}

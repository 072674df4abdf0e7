//! Map view model
//!
//! Offers are plotted on a lat/lon canvas centred on the city. The visible
//! window follows the city zoom and grows to include every point.

use six_cities_client::{Location, Offer, OfferId};

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub id: OfferId,
    pub latitude: f64,
    pub longitude: f64,
    /// Offer under the cursor (or the offer being viewed)
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewModel {
    /// `[min, max]` longitude
    pub x_bounds: [f64; 2],
    /// `[min, max]` latitude
    pub y_bounds: [f64; 2],
    pub points: Vec<MapPoint>,
}

impl MapViewModel {
    pub fn new<'a>(
        center: Location,
        offers: impl IntoIterator<Item = &'a Offer>,
        active: Option<&OfferId>,
    ) -> Self {
        let points: Vec<MapPoint> = offers
            .into_iter()
            .map(|o| MapPoint {
                id: o.id.clone(),
                latitude: o.location.latitude,
                longitude: o.location.longitude,
                is_active: Some(&o.id) == active,
            })
            .collect();

        // Half the visible width at the given zoom level (web mercator tiles)
        let half_span = 180.0 / 2f64.powi(center.zoom.unwrap_or(12) as i32);
        let mut x_bounds = [center.longitude - half_span, center.longitude + half_span];
        let mut y_bounds = [center.latitude - half_span / 2.0, center.latitude + half_span / 2.0];
        for point in &points {
            x_bounds[0] = x_bounds[0].min(point.longitude);
            x_bounds[1] = x_bounds[1].max(point.longitude);
            y_bounds[0] = y_bounds[0].min(point.latitude);
            y_bounds[1] = y_bounds[1].max(point.latitude);
        }

        Self {
            x_bounds,
            y_bounds,
            points,
        }
    }

    pub fn inactive_coords(&self) -> Vec<(f64, f64)> {
        self.coords(false)
    }

    pub fn active_coords(&self) -> Vec<(f64, f64)> {
        self.coords(true)
    }

    fn coords(&self, active: bool) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.is_active == active)
            .map(|p| (p.longitude, p.latitude))
            .collect()
    }
}

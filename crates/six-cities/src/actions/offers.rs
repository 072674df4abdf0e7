//! Offer list actions

use crate::domain_models::City;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffersAction {
    /// Switch the active city. Applies even while offers are loading.
    ChangeCity(City),
}

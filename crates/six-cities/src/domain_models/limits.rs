//! Display limits for the offer page

/// Images shown in the offer gallery
pub const MAX_GALLERY_IMAGES: usize = 6;

/// Nearby offers listed (and plotted) under an offer
pub const MAX_NEARBY_OFFERS: usize = 3;

/// Reviews listed under an offer
pub const MAX_COMMENTS: usize = 10;

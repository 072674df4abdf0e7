//! Star rating helpers
//!
//! A rating is shown as whole stars: `round(rating)` out of five, each star
//! worth 20%.

const STAR_COUNT: u8 = 5;

/// Number of filled stars for a rating, clamped to 0..=5
pub fn rating_stars(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, STAR_COUNT as f64) as u8
}

/// Star bar rendered as text, e.g. `★★★★☆`
pub fn stars_text(rating: f64) -> String {
    let filled = rating_stars(rating) as usize;
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(STAR_COUNT as usize - filled));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_whole_stars() {
        assert_eq!(rating_stars(4.4), 4);
        assert_eq!(rating_stars(4.5), 5);
        assert_eq!(rating_stars(0.2), 0);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(rating_stars(7.0), 5);
        assert_eq!(rating_stars(-1.0), 0);
        assert_eq!(rating_stars(f64::NAN), 0);
    }

    #[test]
    fn test_stars_text() {
        assert_eq!(stars_text(3.6), "★★★★☆");
        assert_eq!(stars_text(0.0), "☆☆☆☆☆");
    }
}

/// Qualitative rating of a tip percentage.
/// Bands are inclusive and ordered lowest first: 0-9, 10-14, 15-19, 20-24, 25+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipRating {
    Poor,
    Acceptable,
    Good,
    Great,
    Amazing,
}

/// Color token attached to each rating.
/// The UI resolves a token to a concrete color for the active display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingColor {
    TipPoor,
    TipAcceptable,
    TipGood,
    TipGreat,
    TipAmazing,
}

impl TipRating {
    /// Rating for a tip percentage. Total over every `u32`.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=9 => Self::Poor,
            10..=14 => Self::Acceptable,
            15..=19 => Self::Good,
            20..=24 => Self::Great,
            _ => Self::Amazing,
        }
    }

    /// Get the label shown next to the slider
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Acceptable => "Acceptable",
            Self::Good => "Good",
            Self::Great => "Great",
            Self::Amazing => "Amazing",
        }
    }

    /// Get the color token for this rating
    pub fn color(&self) -> RatingColor {
        match self {
            Self::Poor => RatingColor::TipPoor,
            Self::Acceptable => RatingColor::TipAcceptable,
            Self::Good => RatingColor::TipGood,
            Self::Great => RatingColor::TipGreat,
            Self::Amazing => RatingColor::TipAmazing,
        }
    }

    /// Get all ratings, lowest band first
    pub fn all() -> &'static [TipRating] {
        &[
            Self::Poor,
            Self::Acceptable,
            Self::Good,
            Self::Great,
            Self::Amazing,
        ]
    }
}

impl RatingColor {
    /// Color on a light background
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            RatingColor::TipPoor => (211, 47, 47),
            RatingColor::TipAcceptable => (230, 120, 20),
            RatingColor::TipGood => (190, 160, 20),
            RatingColor::TipGreat => (80, 160, 60),
            RatingColor::TipAmazing => (30, 130, 70),
        }
    }

    /// Lighter variant for dark backgrounds
    pub fn to_rgb_dark(self) -> (u8, u8, u8) {
        match self {
            RatingColor::TipPoor => (240, 110, 110),
            RatingColor::TipAcceptable => (250, 170, 80),
            RatingColor::TipGood => (235, 210, 90),
            RatingColor::TipGreat => (140, 210, 110),
            RatingColor::TipAmazing => (90, 200, 130),
        }
    }
}

impl std::fmt::Display for TipRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (0, TipRating::Poor),
            (9, TipRating::Poor),
            (10, TipRating::Acceptable),
            (14, TipRating::Acceptable),
            (15, TipRating::Good),
            (19, TipRating::Good),
            (20, TipRating::Great),
            (24, TipRating::Great),
            (25, TipRating::Amazing),
            (30, TipRating::Amazing),
        ];
        for (percent, expected) in cases {
            assert_eq!(TipRating::from_percent(percent), expected, "percent {}", percent);
        }
    }

    #[test]
    fn test_far_above_slider_range_is_amazing() {
        assert_eq!(TipRating::from_percent(100), TipRating::Amazing);
        assert_eq!(TipRating::from_percent(u32::MAX), TipRating::Amazing);
    }

    #[test]
    fn test_labels_and_colors_pair_up() {
        let expected = [
            ("Poor", RatingColor::TipPoor),
            ("Acceptable", RatingColor::TipAcceptable),
            ("Good", RatingColor::TipGood),
            ("Great", RatingColor::TipGreat),
            ("Amazing", RatingColor::TipAmazing),
        ];
        for (rating, (label, color)) in TipRating::all().iter().zip(expected) {
            assert_eq!(rating.label(), label);
            assert_eq!(rating.color(), color);
            assert_eq!(rating.to_string(), label);
        }
    }

    #[test]
    fn test_dark_variants_are_lighter() {
        for rating in TipRating::all() {
            let (r, g, b) = rating.color().to_rgb();
            let (dr, dg, db) = rating.color().to_rgb_dark();
            let light_sum = r as u32 + g as u32 + b as u32;
            let dark_sum = dr as u32 + dg as u32 + db as u32;
            assert!(dark_sum > light_sum, "{:?}", rating);
        }
    }
}

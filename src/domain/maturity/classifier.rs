//! Maturity Classifier - threshold lookup from total score to level.

use serde::{Deserialize, Serialize};

use super::level::MaturityLevel;
use crate::domain::foundation::ValidationError;

/// Default lower bounds of the four upper levels.
pub const DEFAULT_MATURITY_THRESHOLDS: [u32; 4] = [110, 140, 170, 200];

/// Ascending lower bounds for `AiAdopting`, `AiGrowing`, `AiMaturing` and
/// `AiLeading`. `AiPreparing` covers everything below the first bound.
///
/// Bands are half-open `[lower, next_lower)`, so they never overlap and
/// leave no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct MaturityBands([u32; 4]);

impl MaturityBands {
    /// Creates bands, rejecting bounds that are not strictly ascending.
    pub fn new(thresholds: [u32; 4]) -> Result<Self, ValidationError> {
        if thresholds[0] == 0 {
            return Err(ValidationError::out_of_range(
                "maturity_thresholds[0]",
                1,
                i32::MAX,
                0,
            ));
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ValidationError::invalid_format(
                "maturity_thresholds",
                format!("bounds must be strictly ascending, got {:?}", thresholds),
            ));
        }
        Ok(Self(thresholds))
    }

    /// The raw lower bounds.
    pub fn thresholds(&self) -> [u32; 4] {
        self.0
    }

    /// Inclusive lower bound of a level.
    pub fn lower_bound(&self, level: MaturityLevel) -> u32 {
        match level.rank() {
            0 => 0,
            rank => self.0[rank - 1],
        }
    }

    /// Exclusive upper bound of a level, `None` for the top level.
    pub fn upper_bound(&self, level: MaturityLevel) -> Option<u32> {
        self.0.get(level.rank()).copied()
    }
}

impl Default for MaturityBands {
    fn default() -> Self {
        Self(DEFAULT_MATURITY_THRESHOLDS)
    }
}

impl TryFrom<Vec<u32>> for MaturityBands {
    type Error = ValidationError;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        let thresholds: [u32; 4] = value.as_slice().try_into().map_err(|_| {
            ValidationError::invalid_format(
                "maturity_thresholds",
                format!("expected 4 bounds, got {}", value.len()),
            )
        })?;
        Self::new(thresholds)
    }
}

impl From<MaturityBands> for Vec<u32> {
    fn from(bands: MaturityBands) -> Self {
        bands.0.to_vec()
    }
}

/// Maps a total score onto a maturity level.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaturityClassifier {
    bands: MaturityBands,
}

impl MaturityClassifier {
    /// Creates a classifier over the given bands.
    pub fn new(bands: MaturityBands) -> Self {
        Self { bands }
    }

    /// The bands in use.
    pub fn bands(&self) -> &MaturityBands {
        &self.bands
    }

    /// Classifies a total score. Never fails.
    ///
    /// Scores below the first bound land in the lowest level; scores above
    /// the achievable maximum land in the top level.
    pub fn classify(&self, total: u32) -> MaturityLevel {
        let rank = self.bands.0.iter().filter(|bound| total >= **bound).count();
        MaturityLevel::ALL[rank]
    }

    /// Points still needed to reach the next level, `None` at the top.
    pub fn points_to_next_level(&self, total: u32) -> Option<u32> {
        let level = self.classify(total);
        self.bands
            .upper_bound(level)
            .map(|upper| upper.saturating_sub(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_bands_classify_each_tier() {
        let classifier = MaturityClassifier::default();
        assert_eq!(classifier.classify(65), MaturityLevel::AiPreparing);
        assert_eq!(classifier.classify(109), MaturityLevel::AiPreparing);
        assert_eq!(classifier.classify(110), MaturityLevel::AiAdopting);
        assert_eq!(classifier.classify(139), MaturityLevel::AiAdopting);
        assert_eq!(classifier.classify(140), MaturityLevel::AiGrowing);
        assert_eq!(classifier.classify(170), MaturityLevel::AiMaturing);
        assert_eq!(classifier.classify(199), MaturityLevel::AiMaturing);
        assert_eq!(classifier.classify(200), MaturityLevel::AiLeading);
        assert_eq!(classifier.classify(203), MaturityLevel::AiLeading);
    }

    #[test]
    fn extremes_clamp_into_terminal_bands() {
        let classifier = MaturityClassifier::default();
        assert_eq!(classifier.classify(0), MaturityLevel::AiPreparing);
        assert_eq!(classifier.classify(u32::MAX), MaturityLevel::AiLeading);
    }

    #[test]
    fn points_to_next_level_counts_gap() {
        let classifier = MaturityClassifier::default();
        assert_eq!(classifier.points_to_next_level(65), Some(45));
        assert_eq!(classifier.points_to_next_level(169), Some(1));
        assert_eq!(classifier.points_to_next_level(203), None);
    }

    #[test]
    fn bands_reject_non_ascending_bounds() {
        assert!(MaturityBands::new([110, 110, 170, 200]).is_err());
        assert!(MaturityBands::new([200, 170, 140, 110]).is_err());
        assert!(MaturityBands::new([0, 10, 20, 30]).is_err());
        assert!(MaturityBands::new([100, 130, 160, 190]).is_ok());
    }

    #[test]
    fn bands_deserialize_from_list() {
        let bands: MaturityBands = serde_json::from_str("[100, 130, 160, 190]").unwrap();
        assert_eq!(bands.thresholds(), [100, 130, 160, 190]);
        assert!(serde_json::from_str::<MaturityBands>("[100, 130]").is_err());
    }

    #[test]
    fn band_bounds_tile_the_range() {
        let bands = MaturityBands::default();
        for pair in MaturityLevel::ALL.windows(2) {
            assert_eq!(bands.upper_bound(pair[0]), Some(bands.lower_bound(pair[1])));
        }
        assert_eq!(bands.upper_bound(MaturityLevel::AiLeading), None);
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 0u32..400, b in 0u32..400) {
            let classifier = MaturityClassifier::default();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classifier.classify(low) <= classifier.classify(high));
        }

        #[test]
        fn classification_respects_band_bounds(total in 0u32..400) {
            let classifier = MaturityClassifier::default();
            let level = classifier.classify(total);
            prop_assert!(total >= classifier.bands().lower_bound(level));
            if let Some(upper) = classifier.bands().upper_bound(level) {
                prop_assert!(total < upper);
            }
        }
    }
}

//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::maturity::{MaturityBands, DEFAULT_MATURITY_THRESHOLDS};
use crate::domain::strategy::DEFAULT_STRENGTH_TOLERANCE;

/// Classification and ranking parameters
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Lower bounds of AI Adopting, AI Growing, AI Maturing and AI Leading
    #[serde(default = "default_thresholds")]
    pub maturity_thresholds: Vec<u32>,

    /// Percentage points within which categories share the strength/weakness quadrant
    #[serde(default = "default_strength_tolerance")]
    pub strength_tolerance: u8,
}

impl ScoringConfig {
    /// Builds the maturity bands from the configured thresholds
    pub fn maturity_bands(&self) -> Result<MaturityBands, ValidationError> {
        let thresholds: [u32; 4] = self.maturity_thresholds.clone().try_into().map_err(
            |values: Vec<u32>| {
                ValidationError::InvalidThresholds(format!(
                    "expected exactly 4 values, got {}",
                    values.len()
                ))
            },
        )?;
        MaturityBands::new(thresholds)
            .map_err(|e| ValidationError::InvalidThresholds(e.to_string()))
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.maturity_bands()?;
        if self.strength_tolerance > 100 {
            return Err(ValidationError::InvalidStrengthTolerance(
                self.strength_tolerance,
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            maturity_thresholds: default_thresholds(),
            strength_tolerance: default_strength_tolerance(),
        }
    }
}

fn default_thresholds() -> Vec<u32> {
    DEFAULT_MATURITY_THRESHOLDS.to_vec()
}

fn default_strength_tolerance() -> u8 {
    DEFAULT_STRENGTH_TOLERANCE
}

//! Maturity Module - Discrete AI-maturity tiers and their classification.

mod classifier;
mod level;

pub use classifier::{MaturityBands, MaturityClassifier, DEFAULT_MATURITY_THRESHOLDS};
pub use level::{Grade, MaturityLevel};

//! Strategy Module - SWOT/TOWS synthesis from scores and benchmarks.

pub mod phrases;
mod swot;
mod synthesizer;
mod tows;

pub use phrases::CapabilityBand;
pub use swot::{SwotAnalysis, SwotQuadrant};
pub use synthesizer::{StrategySynthesizer, SynthesisOutcome, DEFAULT_STRENGTH_TOLERANCE};
pub use tows::{StrategyQuadrant, StrategySet};

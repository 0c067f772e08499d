//! Domain layer containing the diagnosis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, IDs, errors, state machine trait)
//! - `assessment` - Question schema, submissions and category scoring
//! - `maturity` - Maturity levels, grades and threshold classification
//! - `benchmark` - Static per-industry reference data
//! - `strategy` - SWOT/TOWS synthesis and canned phrases
//! - `report` - Narrative report assembly
//! - `diagnosis` - Lifecycle of one diagnosis run

pub mod assessment;
pub mod benchmark;
pub mod diagnosis;
pub mod foundation;
pub mod maturity;
pub mod report;
pub mod strategy;

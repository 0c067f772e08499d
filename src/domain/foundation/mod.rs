//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers and error types used by every other
//! domain module.

mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::DiagnosisId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

//! Diagnosis Module - Lifecycle of one diagnosis run.

mod fallback;
mod state;

pub use fallback::FallbackReason;
pub use state::DiagnosisState;

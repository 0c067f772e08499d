//! Application handlers.

pub mod diagnosis;

pub use diagnosis::{DiagnosisOrchestrator, EnrichmentPolicy, OrchestratorSetupError};

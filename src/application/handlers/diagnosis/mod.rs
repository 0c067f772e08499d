//! Diagnosis handlers.

mod diagnose;

pub use diagnose::{DiagnosisOrchestrator, EnrichmentPolicy, OrchestratorSetupError};

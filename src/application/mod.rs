//! Application layer - the inbound diagnosis operation.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{DiagnosisOrchestrator, EnrichmentPolicy, OrchestratorSetupError};

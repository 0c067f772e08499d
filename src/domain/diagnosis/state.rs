//! Diagnosis run state machine.
//!
//! Tracks one run of the fallback orchestrator from request to report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The lifecycle state of one diagnosis run.
///
/// - `Idle`: request received, nothing attempted
/// - `AttemptingEnrichment`: external enrichment call in flight (including its one retry)
/// - `EnrichmentSucceeded`: a parseable result arrived within the timeout
/// - `EnrichmentFailed`: the call failed, timed out, or returned garbage
/// - `LocalSynthesis`: the report is built purely locally
/// - `Done`: a report has been produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisState {
    #[default]
    Idle,
    AttemptingEnrichment,
    EnrichmentSucceeded,
    EnrichmentFailed,
    LocalSynthesis,
    Done,
}

impl DiagnosisState {
    /// Returns true once a report has been produced.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for DiagnosisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::AttemptingEnrichment => "attempting_enrichment",
            Self::EnrichmentSucceeded => "enrichment_succeeded",
            Self::EnrichmentFailed => "enrichment_failed",
            Self::LocalSynthesis => "local_synthesis",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

impl StateMachine for DiagnosisState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DiagnosisState::*;
        matches!(
            (self, target),
            // Provider configured
            (Idle, AttemptingEnrichment) |
            // No provider configured
            (Idle, LocalSynthesis) |
            (AttemptingEnrichment, EnrichmentSucceeded) |
            (AttemptingEnrichment, EnrichmentFailed) |
            (EnrichmentFailed, LocalSynthesis) |
            (EnrichmentSucceeded, Done) |
            (LocalSynthesis, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DiagnosisState::*;
        match self {
            Idle => vec![AttemptingEnrichment, LocalSynthesis],
            AttemptingEnrichment => vec![EnrichmentSucceeded, EnrichmentFailed],
            EnrichmentSucceeded => vec![Done],
            EnrichmentFailed => vec![LocalSynthesis],
            LocalSynthesis => vec![Done],
            Done => vec![],
        }
    }
}

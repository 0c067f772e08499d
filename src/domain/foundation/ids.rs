//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one diagnosis run.
///
/// Generated when the orchestrator accepts a submission and carried on the
/// report so the persistence and delivery collaborators can correlate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisId(Uuid);

impl DiagnosisId {
    /// Creates a new random DiagnosisId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DiagnosisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DiagnosisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiagnosisId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

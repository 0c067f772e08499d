//! Why a report was produced by local synthesis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason the orchestrator fell back to local synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    /// No enrichment provider is configured.
    NoProviderConfigured,
    /// The enrichment call exceeded its time bound (milliseconds).
    Timeout(u64),
    /// The provider returned an error.
    ProviderError(String),
    /// The provider answered, but the payload could not be parsed.
    UnparseablePayload(String),
}

impl FallbackReason {
    /// Returns true if an enrichment call was attempted.
    pub fn attempted_enrichment(&self) -> bool {
        !matches!(self, Self::NoProviderConfigured)
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProviderConfigured => write!(f, "no enrichment provider configured"),
            Self::Timeout(ms) => write!(f, "enrichment timed out after {}ms", ms),
            Self::ProviderError(msg) => write!(f, "enrichment provider error: {}", msg),
            Self::UnparseablePayload(msg) => write!(f, "unparseable enrichment payload: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_provider_is_not_an_attempt() {
        assert!(!FallbackReason::NoProviderConfigured.attempted_enrichment());
        assert!(FallbackReason::Timeout(100).attempted_enrichment());
    }

    #[test]
    fn display_includes_detail() {
        let reason = FallbackReason::ProviderError("HTTP 503".to_string());
        assert_eq!(reason.to_string(), "enrichment provider error: HTTP 503");
    }
}

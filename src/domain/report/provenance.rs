//! Which path produced a report.

use crate::domain::diagnosis::FallbackReason;

/// Internal marker for how a report was produced.
///
/// Both variants yield the same report shape; callers that need to know
/// the path ask the report for its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportProvenance {
    /// Narrative sections were overlaid with an enrichment result.
    Enriched { provider: String, model: String },
    /// The report was built purely locally.
    LocalSynthesis { reason: FallbackReason },
}

impl ReportProvenance {
    pub fn local(reason: FallbackReason) -> Self {
        Self::LocalSynthesis { reason }
    }

    pub fn is_enriched(&self) -> bool {
        matches!(self, Self::Enriched { .. })
    }

    /// Returns true if the report came from the local fallback path.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::LocalSynthesis { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Self::LocalSynthesis { reason } => Some(reason),
            Self::Enriched { .. } => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Enriched { .. } => "enriched",
            Self::LocalSynthesis { .. } => "local_synthesis",
        }
    }
}

//! Enrichment Provider Port - Interface for generative-model narrative enrichment.
//!
//! The diagnosis core computes everything locally; a provider may only
//! rewrite the narrative parts. Implementations answer with text that
//! should contain a JSON object shaped like
//! [`EnrichedNarrative`](crate::domain::report::EnrichedNarrative).
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl EnrichmentProvider for EchoProvider {
//!     async fn enrich(&self, context: &PromptContext) -> Result<EnrichmentResponse, EnrichmentError> {
//!         Ok(EnrichmentResponse::new(r#"{"executive_summary": "..."}"#, "echo"))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{ScoreSummary, Submission};
use crate::domain::benchmark::IndustryBenchmark;
use crate::domain::maturity::MaturityLevel;
use crate::domain::strategy::SynthesisOutcome;

/// Port for the optional enrichment call.
///
/// Implementations must not retry internally. The orchestrator owns the
/// retry policy and the overall deadline.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Requests narrative text for one diagnosis.
    async fn enrich(&self, context: &PromptContext) -> Result<EnrichmentResponse, EnrichmentError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Locally computed facts handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContext {
    pub company_name: String,
    pub industry: String,
    pub employee_count: String,
    pub revenue: String,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub maturity_level: String,
    pub grade: String,
    /// One line per category, strongest first.
    pub category_lines: Vec<String>,
    pub benchmark_average: u32,
    pub benchmark_insight: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub challenges: String,
    pub expected_benefits: String,
}

impl PromptContext {
    /// Collects the prompt facts from local results.
    pub fn from_results(
        submission: &Submission,
        summary: &ScoreSummary,
        maturity: MaturityLevel,
        benchmark: &IndustryBenchmark,
        synthesis: &SynthesisOutcome,
    ) -> Self {
        let company = submission.company();
        Self {
            company_name: company.name.clone(),
            industry: benchmark.display_name.clone(),
            employee_count: company.employee_count.label().to_string(),
            revenue: company.revenue.label().to_string(),
            total_score: summary.total,
            max_score: summary.max_possible,
            percentage: summary.percentage.value(),
            maturity_level: maturity.label().to_string(),
            grade: maturity.grade().to_string(),
            category_lines: summary
                .ranked()
                .iter()
                .map(|c| {
                    format!(
                        "{}: {}/{} ({})",
                        c.category.label(),
                        c.score,
                        c.max_score,
                        c.percentage
                    )
                })
                .collect(),
            benchmark_average: benchmark.average_score,
            benchmark_insight: benchmark.insight.clone(),
            strengths: synthesis.swot.strengths.clone(),
            weaknesses: synthesis.swot.weaknesses.clone(),
            challenges: submission.challenges().trim().to_string(),
            expected_benefits: submission.expected_benefits().trim().to_string(),
        }
    }

    /// Instructions for the model, including the required answer shape.
    pub fn system_prompt(&self) -> String {
        String::from(
            "You are an AI strategy consultant writing an AI capability diagnosis for a company. \
             Use only the facts provided. Answer with a single JSON object and nothing else, \
             with the keys \"executive_summary\" (string, 3-5 sentences), \
             \"key_findings\" (array of 4-6 strings) and \
             \"strategic_recommendations\" (array of 4-6 strings).",
        )
    }

    /// The diagnosis facts as a user message.
    pub fn user_prompt(&self) -> String {
        let mut prompt = format!(
            "Company: {}\nIndustry: {}\nSize: {}, {}\n",
            self.company_name, self.industry, self.employee_count, self.revenue
        );
        prompt.push_str(&format!(
            "Total score: {}/{} ({}%)\nMaturity: {} (grade {})\nIndustry average: {}\n",
            self.total_score,
            self.max_score,
            self.percentage,
            self.maturity_level,
            self.grade,
            self.benchmark_average
        ));
        prompt.push_str("\nCategory scores:\n");
        for line in &self.category_lines {
            prompt.push_str(&format!("- {}\n", line));
        }
        prompt.push_str("\nStrengths:\n");
        for line in &self.strengths {
            prompt.push_str(&format!("- {}\n", line));
        }
        prompt.push_str("\nWeaknesses:\n");
        for line in &self.weaknesses {
            prompt.push_str(&format!("- {}\n", line));
        }
        prompt.push_str(&format!("\nIndustry insight: {}\n", self.benchmark_insight));
        if !self.challenges.is_empty() {
            prompt.push_str(&format!("Stated challenges: {}\n", self.challenges));
        }
        if !self.expected_benefits.is_empty() {
            prompt.push_str(&format!("Expected benefits: {}\n", self.expected_benefits));
        }
        prompt
    }
}

/// Raw provider answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResponse {
    /// Generated text.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

impl EnrichmentResponse {
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: model.into(),
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "openai", "anthropic").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Enrichment provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable (upstream 5xx).
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured bound.
        timeout_ms: u64,
    },
}

impl EnrichmentError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a single retry may succeed.
    ///
    /// Timeouts are not transient: retrying them would exceed the latency bound.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            EnrichmentError::Unavailable { .. } | EnrichmentError::Network(_)
        )
    }
}

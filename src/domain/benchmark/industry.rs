//! Industry identifiers and benchmark records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Identifier of the generic benchmark every lookup can fall back to.
pub const GENERIC_INDUSTRY: &str = "other";

/// Normalized industry identifier.
///
/// Case-insensitive; `/`, `-`, `&` and whitespace become `_`; common
/// aliases resolve to their canonical identifier. An empty input becomes
/// the generic identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IndustryId(String);

impl IndustryId {
    /// Parses and normalizes a raw identifier. Never fails.
    pub fn parse(raw: &str) -> Self {
        let mut normalized = String::with_capacity(raw.len());
        for c in raw.trim().chars() {
            if c.is_alphanumeric() {
                normalized.extend(c.to_lowercase());
            } else if !normalized.ends_with('_') && !normalized.is_empty() {
                normalized.push('_');
            }
        }
        let normalized = normalized.trim_end_matches('_').to_string();

        let canonical = match normalized.as_str() {
            "" => GENERIC_INDUSTRY,
            "it" | "software" | "it_software" | "software_it" | "ict" | "information_technology"
            | "tech" | "technology" => "it_software",
            "finance" | "financial" | "financial_services" | "bank" | "banking" | "insurance"
            | "fintech" => "finance",
            "manufacturing" | "manufacture" | "factory" | "industrial" => "manufacturing",
            "retail" | "commerce" | "ecommerce" | "e_commerce" | "distribution" | "wholesale" => {
                "retail"
            }
            "healthcare" | "health" | "medical" | "bio" | "pharma" | "life_sciences" => "healthcare",
            "construction" | "real_estate" | "architecture" => "construction",
            "logistics" | "transport" | "transportation" | "shipping" => "logistics",
            "education" | "edtech" | "training" => "education",
            "public" | "public_sector" | "government" | "nonprofit" => "public_sector",
            "other" | "generic" | "etc" => GENERIC_INDUSTRY,
            other => other,
        };
        Self(canonical.to_string())
    }

    /// The generic identifier.
    pub fn other() -> Self {
        Self(GENERIC_INDUSTRY.to_string())
    }

    /// Returns the normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndustryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IndustryId {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<IndustryId> for String {
    fn from(id: IndustryId) -> Self {
        id.0
    }
}

/// Static reference metrics for one industry.
///
/// Scores are on the same 0-225 scale as a submission's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub industry: IndustryId,
    pub display_name: String,
    pub average_score: u32,
    pub top_decile_score: u32,
    pub bottom_decile_score: u32,
    /// Share of companies in the industry already using AI in production.
    pub adoption_rate: Percentage,
    pub growth_insight: String,
    pub trends: Vec<String>,
    pub insight: String,
    pub key_use_cases: Vec<String>,
}

impl IndustryBenchmark {
    /// Where a total score sits relative to this benchmark.
    pub fn position(&self, total: u32) -> BenchmarkPosition {
        if total >= self.top_decile_score {
            BenchmarkPosition::TopDecile
        } else if total >= self.average_score {
            BenchmarkPosition::AboveAverage
        } else if total >= self.bottom_decile_score {
            BenchmarkPosition::BelowAverage
        } else {
            BenchmarkPosition::BottomDecile
        }
    }

    /// Signed distance of a total score from the industry average.
    pub fn gap_to_average(&self, total: u32) -> i64 {
        i64::from(total) - i64::from(self.average_score)
    }
}

/// Position of a submission within its industry's distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkPosition {
    BottomDecile,
    BelowAverage,
    AboveAverage,
    TopDecile,
}

impl BenchmarkPosition {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkPosition::BottomDecile => "bottom 10% of the industry",
            BenchmarkPosition::BelowAverage => "below the industry average",
            BenchmarkPosition::AboveAverage => "above the industry average",
            BenchmarkPosition::TopDecile => "top 10% of the industry",
        }
    }

    /// Returns true if at or above the industry average.
    pub fn is_ahead(&self) -> bool {
        matches!(self, BenchmarkPosition::AboveAverage | BenchmarkPosition::TopDecile)
    }
}

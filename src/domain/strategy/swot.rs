//! SWOT quadrants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four SWOT quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwotQuadrant {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotQuadrant {
    pub const ALL: [SwotQuadrant; 4] = [
        SwotQuadrant::Strengths,
        SwotQuadrant::Weaknesses,
        SwotQuadrant::Opportunities,
        SwotQuadrant::Threats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SwotQuadrant::Strengths => "Strengths",
            SwotQuadrant::Weaknesses => "Weaknesses",
            SwotQuadrant::Opportunities => "Opportunities",
            SwotQuadrant::Threats => "Threats",
        }
    }
}

impl fmt::Display for SwotQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered statements per SWOT quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// Statements of one quadrant.
    pub fn quadrant(&self, quadrant: SwotQuadrant) -> &[String] {
        match quadrant {
            SwotQuadrant::Strengths => &self.strengths,
            SwotQuadrant::Weaknesses => &self.weaknesses,
            SwotQuadrant::Opportunities => &self.opportunities,
            SwotQuadrant::Threats => &self.threats,
        }
    }

    /// Returns true if every quadrant has at least one statement.
    pub fn is_complete(&self) -> bool {
        SwotQuadrant::ALL
            .iter()
            .all(|q| !self.quadrant(*q).is_empty())
    }
}

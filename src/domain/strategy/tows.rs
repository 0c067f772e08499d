//! TOWS strategy quadrants (SO, WO, ST, WT).

use serde::{Deserialize, Serialize};
use std::fmt;

/// TOWS pairing of an internal and an external SWOT quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyQuadrant {
    /// Strengths used to capture opportunities.
    SO,
    /// Opportunities used to overcome weaknesses.
    WO,
    /// Strengths used to counter threats.
    ST,
    /// Defensive moves where weaknesses meet threats.
    WT,
}

impl StrategyQuadrant {
    pub const ALL: [StrategyQuadrant; 4] = [
        StrategyQuadrant::SO,
        StrategyQuadrant::WO,
        StrategyQuadrant::ST,
        StrategyQuadrant::WT,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StrategyQuadrant::SO => "SO Strategy (Growth)",
            StrategyQuadrant::WO => "WO Strategy (Improvement)",
            StrategyQuadrant::ST => "ST Strategy (Differentiation)",
            StrategyQuadrant::WT => "WT Strategy (Defense)",
        }
    }
}

impl fmt::Display for StrategyQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Action lists per TOWS quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    pub so: Vec<String>,
    pub wo: Vec<String>,
    pub st: Vec<String>,
    pub wt: Vec<String>,
}

impl StrategySet {
    pub fn quadrant(&self, quadrant: StrategyQuadrant) -> &[String] {
        match quadrant {
            StrategyQuadrant::SO => &self.so,
            StrategyQuadrant::WO => &self.wo,
            StrategyQuadrant::ST => &self.st,
            StrategyQuadrant::WT => &self.wt,
        }
    }

    /// Returns true if every quadrant has at least one action.
    pub fn is_complete(&self) -> bool {
        StrategyQuadrant::ALL
            .iter()
            .all(|q| !self.quadrant(*q).is_empty())
    }
}

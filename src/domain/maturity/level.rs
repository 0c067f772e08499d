//! Maturity levels and letter grades.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered AI-maturity tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    AiPreparing,
    AiAdopting,
    AiGrowing,
    AiMaturing,
    AiLeading,
}

impl MaturityLevel {
    /// All levels, lowest first.
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::AiPreparing,
        MaturityLevel::AiAdopting,
        MaturityLevel::AiGrowing,
        MaturityLevel::AiMaturing,
        MaturityLevel::AiLeading,
    ];

    /// Zero-based rank, lowest tier is 0.
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::AiPreparing => "AI Preparing",
            MaturityLevel::AiAdopting => "AI Adopting",
            MaturityLevel::AiGrowing => "AI Growing",
            MaturityLevel::AiMaturing => "AI Maturing",
            MaturityLevel::AiLeading => "AI Leading",
        }
    }

    /// Letter grade for this level.
    pub fn grade(&self) -> Grade {
        match self {
            MaturityLevel::AiPreparing => Grade::E,
            MaturityLevel::AiAdopting => Grade::D,
            MaturityLevel::AiGrowing => Grade::C,
            MaturityLevel::AiMaturing => Grade::B,
            MaturityLevel::AiLeading => Grade::A,
        }
    }

    /// One-line description of an organization at this level.
    pub fn description(&self) -> &'static str {
        match self {
            MaturityLevel::AiPreparing => {
                "AI is not yet part of operations; foundations for digital work are still forming"
            }
            MaturityLevel::AiAdopting => {
                "Individual teams experiment with AI tools without a shared direction"
            }
            MaturityLevel::AiGrowing => {
                "AI delivers value in selected processes and is gaining organizational support"
            }
            MaturityLevel::AiMaturing => {
                "AI is embedded in core processes with governance and measurable outcomes"
            }
            MaturityLevel::AiLeading => {
                "AI shapes strategy and differentiates the business in its market"
            }
        }
    }

    /// The focus that moves an organization to the next level.
    pub fn next_step_focus(&self) -> &'static str {
        match self {
            MaturityLevel::AiPreparing => {
                "digitize core data and run a first low-risk AI pilot"
            }
            MaturityLevel::AiAdopting => {
                "turn scattered experiments into a prioritized portfolio with a named owner"
            }
            MaturityLevel::AiGrowing => {
                "scale proven use cases and standardize data and tooling"
            }
            MaturityLevel::AiMaturing => {
                "industrialize AI delivery and connect it to product and customer strategy"
            }
            MaturityLevel::AiLeading => {
                "sustain the lead through new AI-native offerings and ecosystem partnerships"
            }
        }
    }

    /// The next level up, if any.
    pub fn next(&self) -> Option<MaturityLevel> {
        MaturityLevel::ALL.get(self.rank() + 1).copied()
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Letter grade, `A` best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_improve_with_level() {
        let grades: Vec<Grade> = MaturityLevel::ALL.iter().map(|l| l.grade()).collect();
        assert_eq!(grades, vec![Grade::E, Grade::D, Grade::C, Grade::B, Grade::A]);
    }

    #[test]
    fn next_level_walks_the_ladder() {
        assert_eq!(MaturityLevel::AiPreparing.next(), Some(MaturityLevel::AiAdopting));
        assert_eq!(MaturityLevel::AiLeading.next(), None);
    }

    #[test]
    fn level_serializes_snake_case() {
        let json = serde_json::to_string(&MaturityLevel::AiLeading).unwrap();
        assert_eq!(json, "\"ai_leading\"");
    }

    #[test]
    fn grade_displays_letter() {
        assert_eq!(Grade::A.to_string(), "A");
    }
}

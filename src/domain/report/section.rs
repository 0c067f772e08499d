//! Report sections in their fixed order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed section types of a report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ExecutiveSummary,
    KeyFindings,
    StrategicRecommendations,
    ImplementationRoadmap,
    RiskAssessment,
    IndustryInsights,
    RoiProjection,
    CompetitiveAdvantage,
}

impl SectionKind {
    /// All section types in output order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::ExecutiveSummary,
        SectionKind::KeyFindings,
        SectionKind::StrategicRecommendations,
        SectionKind::ImplementationRoadmap,
        SectionKind::RiskAssessment,
        SectionKind::IndustryInsights,
        SectionKind::RoiProjection,
        SectionKind::CompetitiveAdvantage,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ExecutiveSummary => "Executive Summary",
            SectionKind::KeyFindings => "Key Findings",
            SectionKind::StrategicRecommendations => "Strategic Recommendations",
            SectionKind::ImplementationRoadmap => "Implementation Roadmap",
            SectionKind::RiskAssessment => "Risk Assessment",
            SectionKind::IndustryInsights => "Industry Insights",
            SectionKind::RoiProjection => "ROI Projection",
            SectionKind::CompetitiveAdvantage => "Competitive Advantage",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One titled section of a report.
///
/// The body is plain text: paragraphs separated by blank lines, list
/// items on lines starting with `- `.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
}

impl ReportSection {
    pub fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            body: body.into(),
        }
    }
}

//! Report aggregate - the complete output of one diagnosis run.

use serde::Serialize;

use super::enrichment::EnrichedNarrative;
use super::provenance::ReportProvenance;
use super::roadmap::RoadmapPhase;
use super::roi::RoiProjection;
use super::section::{ReportSection, SectionKind};
use crate::domain::assessment::{CompanyProfile, ScoreSummary};
use crate::domain::benchmark::BenchmarkPosition;
use crate::domain::foundation::{DiagnosisId, Timestamp};
use crate::domain::maturity::{Grade, MaturityLevel};
use crate::domain::strategy::{StrategySet, SwotAnalysis};

/// A complete, self-contained diagnosis report.
///
/// Created once per run and handed to the caller. Every section in
/// [`SectionKind::ALL`] is present, in order, with a non-empty body. The
/// provenance is kept out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    diagnosis_id: DiagnosisId,
    generated_at: Timestamp,
    company: CompanyProfile,
    industry_name: String,
    score_summary: ScoreSummary,
    maturity_level: MaturityLevel,
    grade: Grade,
    benchmark_position: BenchmarkPosition,
    swot: SwotAnalysis,
    strategies: StrategySet,
    roadmap: Vec<RoadmapPhase>,
    roi: RoiProjection,
    executive_summary: String,
    sections: Vec<ReportSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip)]
    provenance: ReportProvenance,
}

/// Parts of a report, gathered by the assembler.
#[derive(Debug, Clone)]
pub(crate) struct ReportParts {
    pub diagnosis_id: DiagnosisId,
    pub company: CompanyProfile,
    pub industry_name: String,
    pub score_summary: ScoreSummary,
    pub maturity_level: MaturityLevel,
    pub benchmark_position: BenchmarkPosition,
    pub swot: SwotAnalysis,
    pub strategies: StrategySet,
    pub roadmap: Vec<RoadmapPhase>,
    pub roi: RoiProjection,
    pub sections: Vec<ReportSection>,
    pub provenance: ReportProvenance,
}

impl Report {
    pub(crate) fn from_parts(parts: ReportParts) -> Self {
        let executive_summary = parts
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::ExecutiveSummary)
            .map(|s| s.body.clone())
            .unwrap_or_default();
        Self {
            diagnosis_id: parts.diagnosis_id,
            generated_at: Timestamp::now(),
            company: parts.company,
            industry_name: parts.industry_name,
            score_summary: parts.score_summary,
            grade: parts.maturity_level.grade(),
            maturity_level: parts.maturity_level,
            benchmark_position: parts.benchmark_position,
            swot: parts.swot,
            strategies: parts.strategies,
            roadmap: parts.roadmap,
            roi: parts.roi,
            executive_summary,
            sections: parts.sections,
            html: None,
            provenance: parts.provenance,
        }
    }

    /// Overlays enrichment text on the executive summary, key findings and
    /// strategic recommendations. Empty fields keep the local text.
    pub fn with_enrichment(mut self, narrative: &EnrichedNarrative) -> Self {
        if !narrative.executive_summary.is_empty() {
            self.executive_summary = narrative.executive_summary.clone();
            self.replace_body(SectionKind::ExecutiveSummary, narrative.executive_summary.clone());
        }
        if !narrative.key_findings.is_empty() {
            self.replace_body(SectionKind::KeyFindings, bullets(&narrative.key_findings));
        }
        if !narrative.strategic_recommendations.is_empty() {
            self.replace_body(
                SectionKind::StrategicRecommendations,
                bullets(&narrative.strategic_recommendations),
            );
        }
        self
    }

    /// Attaches the rendered HTML document.
    pub fn with_html(mut self, html: String) -> Self {
        self.html = Some(html);
        self
    }

    fn replace_body(&mut self, kind: SectionKind, body: String) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.kind == kind) {
            section.body = body;
        }
    }

    pub fn diagnosis_id(&self) -> DiagnosisId {
        self.diagnosis_id
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Display name of the benchmark industry used.
    pub fn industry_name(&self) -> &str {
        &self.industry_name
    }

    pub fn score_summary(&self) -> &ScoreSummary {
        &self.score_summary
    }

    pub fn maturity_level(&self) -> MaturityLevel {
        self.maturity_level
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn benchmark_position(&self) -> BenchmarkPosition {
        self.benchmark_position
    }

    pub fn swot(&self) -> &SwotAnalysis {
        &self.swot
    }

    pub fn strategies(&self) -> &StrategySet {
        &self.strategies
    }

    pub fn roadmap(&self) -> &[RoadmapPhase] {
        &self.roadmap
    }

    pub fn roi(&self) -> &RoiProjection {
        &self.roi
    }

    pub fn executive_summary(&self) -> &str {
        &self.executive_summary
    }

    /// Sections in fixed order.
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Pre-rendered HTML document, if rendering was enabled.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// How this report was produced.
    pub fn provenance(&self) -> &ReportProvenance {
        &self.provenance
    }

    /// Returns true if every fixed section is present, in order, and non-empty.
    pub fn is_complete(&self) -> bool {
        self.sections.len() == SectionKind::ALL.len()
            && self
                .sections
                .iter()
                .zip(SectionKind::ALL)
                .all(|(section, kind)| section.kind == kind && !section.body.trim().is_empty())
            && !self.executive_summary.trim().is_empty()
    }
}

/// Formats items as `- ` list lines.
pub(crate) fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Narrative Report Assembler - composes computed results into sections.
//!
//! Every section is built by substituting values into a fixed template,
//! so the shape is identical for every run: all sections, same order,
//! never empty.

use super::aggregate::{bullets, Report, ReportParts};
use super::provenance::ReportProvenance;
use super::roadmap::{build_roadmap, RoadmapPhase};
use super::roi::RoiProjection;
use super::section::{ReportSection, SectionKind};
use crate::domain::assessment::{ScoreSummary, Submission};
use crate::domain::benchmark::{BenchmarkPosition, IndustryBenchmark};
use crate::domain::foundation::DiagnosisId;
use crate::domain::maturity::MaturityLevel;
use crate::domain::strategy::phrases::{finding_phrase, leverage_action, risk};
use crate::domain::strategy::{CapabilityBand, StrategyQuadrant, SynthesisOutcome};

/// Everything the assembler reads for one report.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub diagnosis_id: DiagnosisId,
    pub submission: &'a Submission,
    pub summary: &'a ScoreSummary,
    pub maturity: MaturityLevel,
    /// Points missing to the next maturity level, `None` at the top.
    pub points_to_next_level: Option<u32>,
    pub benchmark: &'a IndustryBenchmark,
    pub synthesis: &'a SynthesisOutcome,
}

/// Stateless template assembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeAssembler;

impl NarrativeAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Builds a complete report from local results.
    pub fn assemble(&self, input: &AssemblyInput<'_>, provenance: ReportProvenance) -> Report {
        let company = input.submission.company();
        let roadmap = build_roadmap(
            input.maturity,
            &input.synthesis.weakness_sources,
            &input.synthesis.strength_sources,
        );
        let roi = RoiProjection::project(input.maturity, company.employee_count, company.revenue);

        let sections = SectionKind::ALL
            .iter()
            .map(|kind| {
                let body = match kind {
                    SectionKind::ExecutiveSummary => executive_summary(input),
                    SectionKind::KeyFindings => key_findings(input),
                    SectionKind::StrategicRecommendations => strategic_recommendations(input),
                    SectionKind::ImplementationRoadmap => implementation_roadmap(&roadmap),
                    SectionKind::RiskAssessment => risk_assessment(input),
                    SectionKind::IndustryInsights => industry_insights(input.benchmark),
                    SectionKind::RoiProjection => roi_projection(input.submission, &roi),
                    SectionKind::CompetitiveAdvantage => competitive_advantage(input),
                };
                ReportSection::new(*kind, body)
            })
            .collect();

        Report::from_parts(ReportParts {
            diagnosis_id: input.diagnosis_id,
            company: company.clone(),
            industry_name: input.benchmark.display_name.clone(),
            score_summary: input.summary.clone(),
            maturity_level: input.maturity,
            benchmark_position: input.benchmark.position(input.summary.total),
            swot: input.synthesis.swot.clone(),
            strategies: input.synthesis.strategies.clone(),
            roadmap,
            roi,
            sections,
            provenance,
        })
    }
}

fn executive_summary(input: &AssemblyInput<'_>) -> String {
    let company = input.submission.company();
    let summary = input.summary;
    let benchmark = input.benchmark;
    let level = input.maturity;

    let mut text = format!(
        "{} scored {} of {} points ({}) in the AI capability diagnosis, placing it at the {} level (grade {}). {}.",
        company.name,
        summary.total,
        summary.max_possible,
        summary.percentage,
        level,
        level.grade(),
        level.description()
    );
    text.push_str(&format!(
        " Against the {} average of {} points, the result is {}.",
        benchmark.display_name,
        benchmark.average_score,
        benchmark.position(summary.total).label()
    ));

    let synthesis = input.synthesis;
    match (
        synthesis.strength_sources.first(),
        synthesis.weakness_sources.first(),
    ) {
        (Some(strong), Some(weak)) => text.push_str(&format!(
            " The strongest area is {}; the highest-priority area is {}.",
            strong.label(),
            weak.label()
        )),
        _ => text.push_str(" Capabilities are evenly balanced across the categories."),
    }

    text.push_str(&format!(" Next focus: {}", level.next_step_focus()));
    match (input.points_to_next_level, level.next()) {
        (Some(points), Some(next)) => {
            text.push_str(&format!(" ({} more points reach {}).", points, next))
        }
        _ => text.push('.'),
    }
    text
}

fn key_findings(input: &AssemblyInput<'_>) -> String {
    let summary = input.summary;
    let mut items = vec![format!(
        "Overall maturity: {} (grade {}) with {} of {} points",
        input.maturity,
        input.maturity.grade(),
        summary.total,
        summary.max_possible
    )];
    items.extend(summary.ranked().iter().map(|score| {
        finding_phrase(
            score.category,
            CapabilityBand::from_percentage(score.percentage),
            score.percentage,
        )
    }));

    let benchmark = input.benchmark;
    let gap = benchmark.gap_to_average(summary.total);
    items.push(format!(
        "Industry position: {} ({:+} points vs. the {} average of {})",
        benchmark.position(summary.total).label(),
        gap,
        benchmark.display_name,
        benchmark.average_score
    ));

    let defects = input.submission.defects();
    if !defects.defaulted.is_empty() {
        items.push(format!(
            "{} unanswered questions were scored at the minimum",
            defects.defaulted.len()
        ));
    }
    bullets(&items)
}

fn strategic_recommendations(input: &AssemblyInput<'_>) -> String {
    let strategies = &input.synthesis.strategies;
    let items: Vec<String> = StrategyQuadrant::ALL
        .iter()
        .flat_map(|quadrant| {
            strategies
                .quadrant(*quadrant)
                .iter()
                .map(move |action| format!("{}: {}", quadrant.label(), action))
        })
        .collect();
    bullets(&items)
}

fn implementation_roadmap(roadmap: &[RoadmapPhase]) -> String {
    let mut text = String::new();
    for phase in roadmap {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&format!("{} ({})\n", phase.title, phase.horizon));
        text.push_str(&bullets(&phase.actions));
    }
    text
}

fn risk_assessment(input: &AssemblyInput<'_>) -> String {
    let mut items: Vec<String> = input
        .synthesis
        .weakness_sources
        .iter()
        .map(|category| format!("{}: {}", category.label(), risk(*category)))
        .collect();
    items.extend(input.synthesis.swot.threats.iter().cloned());
    items.push(
        "Governance: set data-privacy and acceptable-use rules for AI before scaling".to_string(),
    );
    bullets(&items)
}

fn industry_insights(benchmark: &IndustryBenchmark) -> String {
    let mut text = format!("{}\n\n", benchmark.insight);
    text.push_str(&format!(
        "Benchmark for {}: average {} points, top 10% from {} points, bottom 10% below {} points; {} of companies already use AI.",
        benchmark.display_name,
        benchmark.average_score,
        benchmark.top_decile_score,
        benchmark.bottom_decile_score,
        benchmark.adoption_rate
    ));
    if !benchmark.growth_insight.is_empty() {
        text.push_str(&format!("\n\n{}", benchmark.growth_insight));
    }
    if !benchmark.trends.is_empty() {
        text.push_str("\n\nKey trends:\n");
        text.push_str(&bullets(&benchmark.trends));
    }
    text
}

fn roi_projection(submission: &Submission, roi: &RoiProjection) -> String {
    let mut text = format!(
        "Expected efficiency gain: {}-{}% on AI-supported processes, with a payback period of about {} months for a company with {}.\n\n{}.",
        roi.efficiency_gain_min,
        roi.efficiency_gain_max,
        roi.payback_months,
        submission.company().employee_count.label(),
        roi.value_statement
    );
    let benefits = submission.expected_benefits().trim();
    if !benefits.is_empty() {
        text.push_str(&format!("\n\nStated expected benefits: {}", benefits));
    }
    text
}

fn competitive_advantage(input: &AssemblyInput<'_>) -> String {
    let benchmark = input.benchmark;
    let position = benchmark.position(input.summary.total);
    let mut text = match position {
        BenchmarkPosition::TopDecile => format!(
            "The company is among the AI leaders in {}. The priority is to turn this lead into differentiated products and services.",
            benchmark.display_name
        ),
        BenchmarkPosition::AboveAverage => format!(
            "The company is ahead of the typical {} company. Focused investment can move it into the top 10%, which starts at {} points.",
            benchmark.display_name, benchmark.top_decile_score
        ),
        BenchmarkPosition::BelowAverage => format!(
            "The company trails the {} average by {} points. Closing the gap in the weakest areas restores parity quickly.",
            benchmark.display_name,
            benchmark.gap_to_average(input.summary.total).unsigned_abs()
        ),
        BenchmarkPosition::BottomDecile => format!(
            "The company is in the bottom 10% of {}. Competitors that adopt AI first will set cost and service expectations.",
            benchmark.display_name
        ),
    };

    let mut items: Vec<String> = input
        .synthesis
        .strength_sources
        .iter()
        .map(|category| leverage_action(*category).to_string())
        .collect();
    items.extend(
        benchmark
            .key_use_cases
            .iter()
            .map(|use_case| format!("Differentiating use case: {}", use_case)),
    );
    if !items.is_empty() {
        text.push_str("\n\n");
        text.push_str(&bullets(&items));
    }
    text
}

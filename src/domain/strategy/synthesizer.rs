//! Strategy Synthesizer - SWOT quadrants and TOWS strategies from scores.
//!
//! Strengths and weaknesses come from the category ranking; opportunities
//! and threats come from the industry benchmark and the stated challenges.
//! Strategies pair the top and bottom categories with the benchmark text
//! through fixed templates. Output is a pure function of the inputs.

use serde::{Deserialize, Serialize};

use super::phrases::{
    improvement_action, leverage_action, risk, strength_phrase, weakness_phrase, CapabilityBand,
};
use super::swot::SwotAnalysis;
use super::tows::StrategySet;
use crate::domain::assessment::{Category, CategoryScore, ScoreSummary};
use crate::domain::benchmark::{BenchmarkPosition, IndustryBenchmark};

/// Default tolerance, in percentage points, for grouping categories with the leader.
pub const DEFAULT_STRENGTH_TOLERANCE: u8 = 5;

/// Maximum statements taken from one end of the ranking.
const MAX_RANKED_STATEMENTS: usize = 3;

/// Maximum characters of the stated challenges quoted in a threat.
const CHALLENGE_EXCERPT_CHARS: usize = 160;

/// SWOT analysis and TOWS strategies produced together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOutcome {
    pub swot: SwotAnalysis,
    pub strategies: StrategySet,
    /// Categories used as strength sources, strongest first.
    pub strength_sources: Vec<Category>,
    /// Categories used as weakness sources, weakest first.
    pub weakness_sources: Vec<Category>,
    /// True when the scores were too sparse to rank.
    pub balanced_profile: bool,
}

/// Derives SWOT/TOWS output from a score summary and a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySynthesizer {
    strength_tolerance: u8,
}

impl Default for StrategySynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_STRENGTH_TOLERANCE)
    }
}

impl StrategySynthesizer {
    /// Creates a synthesizer; categories within `strength_tolerance`
    /// percentage points of the best (or worst) share its quadrant.
    pub fn new(strength_tolerance: u8) -> Self {
        Self {
            strength_tolerance: strength_tolerance.min(100),
        }
    }

    pub fn strength_tolerance(&self) -> u8 {
        self.strength_tolerance
    }

    /// Builds four non-empty SWOT quadrants and four non-empty strategy lists.
    pub fn synthesize(
        &self,
        summary: &ScoreSummary,
        benchmark: &IndustryBenchmark,
        challenges: &str,
    ) -> SynthesisOutcome {
        let ranked = summary.ranked();
        if ranked.len() < 2 {
            return balanced_profile(summary, benchmark, challenges);
        }

        let (strong, weak) = self.split(&ranked);
        let top = strong[0].category;
        let bottom = weak[0].category;

        let strengths = strong
            .iter()
            .map(|c| strength_phrase(c.category, band(c)))
            .collect();
        let weaknesses = weak
            .iter()
            .map(|c| weakness_phrase(c.category, band(c)))
            .collect();

        let swot = SwotAnalysis {
            strengths,
            weaknesses,
            opportunities: opportunities(benchmark),
            threats: threats(summary, benchmark, bottom, challenges),
        };
        let strategies = strategies(top, bottom, benchmark);

        SynthesisOutcome {
            swot,
            strategies,
            strength_sources: strong.iter().map(|c| c.category).collect(),
            weakness_sources: weak.iter().map(|c| c.category).collect(),
            balanced_profile: false,
        }
    }

    /// Splits a ranking (strongest first, at least two entries) into
    /// strength sources and weakness sources (weakest first).
    ///
    /// The two groups never overlap: the top category is always a
    /// strength and the bottom one always a weakness.
    fn split<'a>(
        &self,
        ranked: &[&'a CategoryScore],
    ) -> (Vec<&'a CategoryScore>, Vec<&'a CategoryScore>) {
        let tolerance = self.strength_tolerance;
        let best = ranked[0].percentage.value();
        let worst = ranked[ranked.len() - 1].percentage.value();

        let strong: Vec<&CategoryScore> = ranked[..ranked.len() - 1]
            .iter()
            .take(MAX_RANKED_STATEMENTS)
            .take_while(|c| best - c.percentage.value() <= tolerance)
            .copied()
            .collect();

        let weak: Vec<&CategoryScore> = ranked[strong.len()..]
            .iter()
            .rev()
            .take(MAX_RANKED_STATEMENTS)
            .take_while(|c| c.percentage.value() - worst <= tolerance)
            .copied()
            .collect();

        (strong, weak)
    }
}

fn band(score: &CategoryScore) -> CapabilityBand {
    CapabilityBand::from_percentage(score.percentage)
}

fn opportunities(benchmark: &IndustryBenchmark) -> Vec<String> {
    let mut items: Vec<String> = benchmark
        .trends
        .iter()
        .filter(|t| !t.trim().is_empty())
        .take(MAX_RANKED_STATEMENTS)
        .map(|trend| format!("{} trend: {}", benchmark.display_name, trend))
        .collect();

    if !benchmark.growth_insight.trim().is_empty() {
        items.push(benchmark.growth_insight.clone());
    }
    if let Some(use_case) = benchmark.key_use_cases.first() {
        items.push(format!("Proven use case in the industry: {}", use_case));
    }
    if items.is_empty() {
        items.push(format!(
            "AI adoption in {} is still early enough for first movers to gain an edge",
            benchmark.display_name
        ));
    }
    items
}

fn threats(
    summary: &ScoreSummary,
    benchmark: &IndustryBenchmark,
    weakest: Category,
    challenges: &str,
) -> Vec<String> {
    let mut items = Vec::new();

    let position = benchmark.position(summary.total);
    let gap = benchmark.gap_to_average(summary.total);
    items.push(match position {
        BenchmarkPosition::BottomDecile | BenchmarkPosition::BelowAverage => format!(
            "Score is {} points behind the {} average of {}; competitors are pulling ahead",
            gap.unsigned_abs(),
            benchmark.display_name,
            benchmark.average_score
        ),
        BenchmarkPosition::AboveAverage | BenchmarkPosition::TopDecile => format!(
            "The lead over the {} average ({}) will narrow as {} of companies already use AI",
            benchmark.display_name, benchmark.average_score, benchmark.adoption_rate
        ),
    });

    let weakest_risk = risk(weakest);
    items.push(format!(
        "{}{}",
        weakest_risk[..1].to_uppercase(),
        &weakest_risk[1..]
    ));

    let stated = excerpt(challenges, CHALLENGE_EXCERPT_CHARS);
    if !stated.is_empty() {
        items.push(format!("Stated challenge: {}", stated));
    }
    items
}

fn strategies(top: Category, bottom: Category, benchmark: &IndustryBenchmark) -> StrategySet {
    let trend = benchmark
        .trends
        .first()
        .map(String::as_str)
        .unwrap_or("industry AI adoption");
    let use_case = benchmark
        .key_use_cases
        .first()
        .map(String::as_str)
        .unwrap_or("a proven industry use case");

    StrategySet {
        so: vec![
            format!("Use strong {} to move early on {}", top.label(), trend),
            leverage_action(top).to_string(),
        ],
        wo: vec![
            format!(
                "Close the {} gap with a focused pilot on {}",
                bottom.label(),
                use_case
            ),
            improvement_action(bottom).to_string(),
        ],
        st: vec![
            format!(
                "Differentiate on {} before competitors close in: {}",
                top.label(),
                benchmark.insight
            ),
        ],
        wt: vec![
            format!(
                "Contain {} risk before scaling AI: {}",
                bottom.label(),
                risk(bottom)
            ),
            "Start with low-risk, reversible AI use cases and review results quarterly".to_string(),
        ],
    }
}

fn balanced_profile(
    summary: &ScoreSummary,
    benchmark: &IndustryBenchmark,
    challenges: &str,
) -> SynthesisOutcome {
    let focus = summary
        .categories
        .first()
        .map(|c| c.category)
        .unwrap_or(Category::BusinessFoundation);

    let swot = SwotAnalysis {
        strengths: vec![
            "Balanced capability profile with no single dominant area".to_string(),
        ],
        weaknesses: vec![
            "No category stands out, so there is no obvious lever to start from".to_string(),
        ],
        opportunities: opportunities(benchmark),
        threats: threats(summary, benchmark, focus, challenges),
    };
    let strategies = StrategySet {
        so: vec!["Pick one high-value process and apply AI there end to end".to_string()],
        wo: vec![improvement_action(focus).to_string()],
        st: vec![format!(
            "Track {} peers and adopt proven use cases quickly: {}",
            benchmark.display_name, benchmark.insight
        )],
        wt: vec!["Keep early AI investments small and measurable until a lever emerges".to_string()],
    };

    SynthesisOutcome {
        swot,
        strategies,
        strength_sources: Vec::new(),
        weakness_sources: Vec::new(),
        balanced_profile: true,
    }
}

/// First `max_chars` characters of trimmed text, with an ellipsis if cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark::IndustryBenchmarkStore;
    use crate::domain::strategy::{StrategyQuadrant, SwotQuadrant};
    use proptest::prelude::*;

    fn summary_from(percentages: [u32; 6]) -> ScoreSummary {
        let categories = Category::ALL
            .iter()
            .zip(percentages)
            .map(|(category, pct)| CategoryScore::new(*category, pct, 100, 8))
            .collect();
        ScoreSummary::from_categories(categories)
    }

    fn retail() -> IndustryBenchmark {
        IndustryBenchmarkStore::builtin().lookup_str("retail").clone()
    }

    #[test]
    fn top_and_bottom_categories_become_strength_and_weakness() {
        let summary = summary_from([90, 50, 60, 40, 20, 70]);
        let outcome = StrategySynthesizer::default().synthesize(&summary, &retail(), "");

        assert_eq!(outcome.strength_sources, vec![Category::BusinessFoundation]);
        assert_eq!(outcome.weakness_sources, vec![Category::DataManagement]);
        assert!(outcome.swot.strengths[0].contains("Business Foundation"));
        assert!(outcome.swot.weaknesses[0].contains("Data Management"));
        assert!(!outcome.balanced_profile);
    }

    #[test]
    fn categories_within_tolerance_share_the_strength_quadrant() {
        let summary = summary_from([90, 87, 60, 40, 20, 86]);
        let outcome = StrategySynthesizer::new(5).synthesize(&summary, &retail(), "");

        assert_eq!(
            outcome.strength_sources,
            vec![
                Category::BusinessFoundation,
                Category::CurrentAiUse,
                Category::HumanResources
            ]
        );
    }

    #[test]
    fn equal_scores_break_ties_by_declared_order() {
        let summary = summary_from([50; 6]);
        let outcome = StrategySynthesizer::new(0).synthesize(&summary, &retail(), "");

        assert_eq!(outcome.strength_sources[0], Category::BusinessFoundation);
        assert_eq!(outcome.weakness_sources[0], Category::HumanResources);
    }

    #[test]
    fn uniform_scores_with_tolerance_do_not_overlap() {
        let summary = summary_from([50; 6]);
        let outcome = StrategySynthesizer::new(5).synthesize(&summary, &retail(), "");

        for category in &outcome.strength_sources {
            assert!(!outcome.weakness_sources.contains(category));
        }
        assert!(!outcome.weakness_sources.is_empty());
    }

    #[test]
    fn fewer_than_two_categories_yields_balanced_profile() {
        let summary =
            ScoreSummary::from_categories(vec![CategoryScore::new(Category::DataManagement, 20, 35, 7)]);
        let outcome = StrategySynthesizer::default().synthesize(&summary, &retail(), "");

        assert!(outcome.balanced_profile);
        assert!(outcome.swot.is_complete());
        assert!(outcome.strategies.is_complete());
    }

    #[test]
    fn empty_summary_yields_balanced_profile() {
        let summary = ScoreSummary::from_categories(Vec::new());
        let outcome = StrategySynthesizer::default().synthesize(&summary, &retail(), "");
        assert!(outcome.balanced_profile);
        assert!(outcome.swot.is_complete());
    }

    #[test]
    fn stated_challenges_appear_as_threat() {
        let summary = summary_from([90, 50, 60, 40, 20, 70]);
        let outcome = StrategySynthesizer::default().synthesize(
            &summary,
            &retail(),
            "  Hiring data engineers is hard ",
        );
        assert!(outcome
            .swot
            .threats
            .contains(&"Stated challenge: Hiring data engineers is hard".to_string()));
    }

    #[test]
    fn long_challenges_are_truncated() {
        let long = "x".repeat(500);
        let text = excerpt(&long, CHALLENGE_EXCERPT_CHARS);
        assert_eq!(text.chars().count(), CHALLENGE_EXCERPT_CHARS + 3);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn opportunities_come_from_benchmark_trends() {
        let benchmark = retail();
        let summary = summary_from([90, 50, 60, 40, 20, 70]);
        let outcome = StrategySynthesizer::default().synthesize(&summary, &benchmark, "");
        assert!(outcome.swot.opportunities[0].contains(&benchmark.trends[0]));
    }

    #[test]
    fn benchmark_without_text_still_yields_opportunities() {
        let mut benchmark = retail();
        benchmark.trends.clear();
        benchmark.key_use_cases.clear();
        benchmark.growth_insight.clear();
        let summary = summary_from([90, 50, 60, 40, 20, 70]);
        let outcome = StrategySynthesizer::default().synthesize(&summary, &benchmark, "");
        assert_eq!(outcome.swot.opportunities.len(), 1);
        assert!(outcome.strategies.is_complete());
    }

    #[test]
    fn strategies_pair_top_and_bottom_categories() {
        let summary = summary_from([90, 50, 60, 40, 20, 70]);
        let outcome = StrategySynthesizer::default().synthesize(&summary, &retail(), "");
        assert!(outcome.strategies.so[0].contains("Business Foundation"));
        assert!(outcome.strategies.wo[0].contains("Data Management"));
        assert!(outcome.strategies.wt[0].contains("Data Management"));
    }

    proptest! {
        #[test]
        fn always_four_non_empty_quadrants(
            pcts in prop::array::uniform6(0u32..=100),
            tolerance in 0u8..=100,
            industry in "[a-z_]{0,12}",
        ) {
            let benchmark = IndustryBenchmarkStore::builtin().lookup_str(&industry).clone();
            let summary = summary_from(pcts);
            let outcome = StrategySynthesizer::new(tolerance).synthesize(&summary, &benchmark, "");

            for quadrant in SwotQuadrant::ALL {
                prop_assert!(!outcome.swot.quadrant(quadrant).is_empty());
            }
            for quadrant in StrategyQuadrant::ALL {
                prop_assert!(!outcome.strategies.quadrant(quadrant).is_empty());
            }
        }

        #[test]
        fn synthesis_is_idempotent(pcts in prop::array::uniform6(0u32..=100)) {
            let benchmark = retail();
            let summary = summary_from(pcts);
            let synthesizer = StrategySynthesizer::default();
            let first = synthesizer.synthesize(&summary, &benchmark, "budget");
            let second = synthesizer.synthesize(&summary, &benchmark, "budget");
            prop_assert_eq!(first, second);
        }
    }
}

//! Category Scorer - weighted aggregation of answers into category scores.
//!
//! Each category's score is the weighted mean of its answers scaled by its
//! question count, so a category with `n` questions tops out at `5 * n`
//! points and the full schema tops out at 225.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::question::{Category, MAX_ANSWER};
use super::submission::Submission;
use crate::domain::foundation::Percentage;

/// Score of one capability category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// Points earned.
    pub score: u32,
    /// Points achievable.
    pub max_score: u32,
    /// `score / max_score`, rounded.
    pub percentage: Percentage,
    /// Number of questions contributing.
    pub question_count: u8,
}

impl CategoryScore {
    /// Creates a category score; `score` is capped at `max_score`.
    pub fn new(category: Category, score: u32, max_score: u32, question_count: u8) -> Self {
        let score = score.min(max_score);
        Self {
            category,
            score,
            max_score,
            percentage: Percentage::of(score, max_score),
            question_count,
        }
    }
}

/// Total score and per-category breakdown of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total: u32,
    pub max_possible: u32,
    pub percentage: Percentage,
    pub categories: Vec<CategoryScore>,
}

impl ScoreSummary {
    /// Builds a summary whose totals are derived from the categories.
    pub fn from_categories(categories: Vec<CategoryScore>) -> Self {
        let total = categories.iter().map(|c| c.score).sum();
        let max_possible = categories.iter().map(|c| c.max_score).sum();
        Self {
            total,
            max_possible,
            percentage: Percentage::of(total, max_possible),
            categories,
        }
    }

    /// Finds the score of one category.
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Categories ordered strongest first.
    ///
    /// Compares percentages so categories with different question counts
    /// rank fairly. Equal percentages keep the declared category order.
    pub fn ranked(&self) -> Vec<&CategoryScore> {
        let mut ranked: Vec<&CategoryScore> = self.categories.iter().collect();
        ranked.sort_by_key(|c| (Reverse(c.percentage), c.category.ordinal()));
        ranked
    }
}

/// Stateless scorer over the fixed question schema.
pub struct CategoryScorer;

impl CategoryScorer {
    /// Scores a submission. Pure; always produces all six categories.
    pub fn score(submission: &Submission) -> ScoreSummary {
        let categories = Category::ALL
            .iter()
            .map(|category| Self::score_category(submission, *category))
            .collect();
        ScoreSummary::from_categories(categories)
    }

    fn score_category(submission: &Submission, category: Category) -> CategoryScore {
        let mut weighted_sum: u64 = 0;
        let mut weight_total: u64 = 0;
        let mut count: u64 = 0;

        for question in category.questions() {
            let weight = u64::from(question.weight);
            weighted_sum += weight * u64::from(submission.answer(question.id()).value());
            weight_total += weight;
            count += 1;
        }

        let max_score = (count * u64::from(MAX_ANSWER)) as u32;
        if weight_total == 0 {
            return CategoryScore::new(category, 0, max_score, 0);
        }

        // round(weighted_sum * count / weight_total), half away from zero
        let numerator = weighted_sum * count;
        let score = (2 * numerator + weight_total) / (2 * weight_total);

        CategoryScore::new(category, score as u32, max_score, count as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::question::{QuestionId, QUESTION_COUNT};
    use crate::domain::assessment::submission::{
        CompanyProfile, EmployeeCountBucket, RevenueBucket,
    };
    use crate::domain::benchmark::IndustryId;
    use proptest::prelude::*;

    fn profile() -> CompanyProfile {
        CompanyProfile::new(
            "Acme",
            IndustryId::parse("retail"),
            EmployeeCountBucket::UpTo50,
            RevenueBucket::Unknown,
        )
    }

    fn uniform(value: i64) -> Submission {
        Submission::new(profile(), QuestionId::all().map(|id| (id, value)), "", "")
    }

    #[test]
    fn all_fives_reach_maximum() {
        let summary = CategoryScorer::score(&uniform(5));
        assert_eq!(summary.total, 225);
        assert_eq!(summary.max_possible, 225);
        assert_eq!(summary.percentage, Percentage::HUNDRED);
    }

    #[test]
    fn all_ones_reach_minimum() {
        let summary = CategoryScorer::score(&uniform(1));
        assert_eq!(summary.total, 45);
        assert_eq!(summary.percentage.value(), 20);
    }

    #[test]
    fn uniform_answers_scale_by_question_count() {
        let summary = CategoryScorer::score(&uniform(3));
        let business = summary.category(Category::BusinessFoundation).unwrap();
        assert_eq!(business.score, 24);
        assert_eq!(business.max_score, 40);
        assert_eq!(business.question_count, 8);

        let data = summary.category(Category::DataManagement).unwrap();
        assert_eq!(data.score, 21);
        assert_eq!(data.max_score, 35);
    }

    #[test]
    fn weights_favour_important_questions() {
        // q1 has weight 3, q8 has weight 1.
        let mut answers: Vec<(QuestionId, i64)> = QuestionId::all().map(|id| (id, 1)).collect();
        answers[0].1 = 5;
        let heavy = CategoryScorer::score(&Submission::new(profile(), answers, "", ""));

        let mut answers: Vec<(QuestionId, i64)> = QuestionId::all().map(|id| (id, 1)).collect();
        answers[7].1 = 5;
        let light = CategoryScorer::score(&Submission::new(profile(), answers, "", ""));

        let heavy_score = heavy.category(Category::BusinessFoundation).unwrap().score;
        let light_score = light.category(Category::BusinessFoundation).unwrap().score;
        assert!(heavy_score > light_score);
    }

    #[test]
    fn summary_contains_every_category_in_declared_order() {
        let summary = CategoryScorer::score(&uniform(2));
        let order: Vec<Category> = summary.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn ranking_breaks_ties_by_declared_order() {
        let summary = CategoryScorer::score(&uniform(4));
        let ranked: Vec<Category> = summary.ranked().iter().map(|c| c.category).collect();
        assert_eq!(ranked, Category::ALL.to_vec());
    }

    #[test]
    fn ranking_compares_percentages() {
        let summary = ScoreSummary::from_categories(vec![
            CategoryScore::new(Category::BusinessFoundation, 20, 40, 8),
            CategoryScore::new(Category::DataManagement, 30, 35, 7),
        ]);
        assert_eq!(summary.ranked()[0].category, Category::DataManagement);
    }

    #[test]
    fn category_score_is_capped() {
        let score = CategoryScore::new(Category::HumanResources, 99, 35, 7);
        assert_eq!(score.score, 35);
        assert_eq!(score.percentage, Percentage::HUNDRED);
    }

    proptest! {
        #[test]
        fn percentage_always_within_bounds(answers in prop::collection::vec(-10i64..15, QUESTION_COUNT)) {
            let pairs = QuestionId::all().zip(answers);
            let summary = CategoryScorer::score(&Submission::new(profile(), pairs, "", ""));
            prop_assert!(summary.percentage.value() <= 100);
            prop_assert!(summary.total <= summary.max_possible);
            prop_assert_eq!(summary.total, summary.categories.iter().map(|c| c.score).sum::<u32>());
            prop_assert_eq!(summary.percentage, Percentage::of(summary.total, summary.max_possible));
        }
    }
}

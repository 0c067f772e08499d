//! The fixed 45-question self-assessment schema.
//!
//! Questions are numbered `q1`..`q45` and grouped into six capability
//! categories. Each carries an importance weight used by the category
//! scorer's weighted mean.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of questions in the schema.
pub const QUESTION_COUNT: usize = 45;

/// Lowest valid answer.
pub const MIN_ANSWER: u8 = 1;

/// Highest valid answer.
pub const MAX_ANSWER: u8 = 5;

/// The six capability categories, in declared order.
///
/// The declared order is the tie-break order wherever categories are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BusinessFoundation,
    CurrentAiUse,
    OrganizationReadiness,
    TechnologyInfrastructure,
    DataManagement,
    HumanResources,
}

impl Category {
    /// All categories in declared order.
    pub const ALL: [Category; 6] = [
        Category::BusinessFoundation,
        Category::CurrentAiUse,
        Category::OrganizationReadiness,
        Category::TechnologyInfrastructure,
        Category::DataManagement,
        Category::HumanResources,
    ];

    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::BusinessFoundation => "Business Foundation",
            Category::CurrentAiUse => "Current AI Use",
            Category::OrganizationReadiness => "Organization Readiness",
            Category::TechnologyInfrastructure => "Technology Infrastructure",
            Category::DataManagement => "Data Management",
            Category::HumanResources => "Human Resources",
        }
    }

    /// Position in the declared order (0-based).
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    /// Questions assigned to this category.
    pub fn questions(&self) -> impl Iterator<Item = &'static Question> + '_ {
        QUESTIONS.iter().filter(move |q| q.category == *self)
    }

    /// Number of questions assigned to this category.
    pub fn question_count(&self) -> usize {
        self.questions().count()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a question, `1..=45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(u8);

impl QuestionId {
    /// Creates a QuestionId, returning error if outside the schema.
    pub fn new(number: u8) -> Result<Self, ValidationError> {
        if number == 0 || number as usize > QUESTION_COUNT {
            return Err(ValidationError::out_of_range(
                "question_id",
                1,
                QUESTION_COUNT as i32,
                number as i32,
            ));
        }
        Ok(Self(number))
    }

    /// Returns the question number.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based index into answer arrays.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// Iterates every question id in schema order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ValidationError;

    /// Accepts `q12`, `Q12` and bare `12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .unwrap_or(trimmed);
        let number: u8 = digits
            .parse()
            .map_err(|_| ValidationError::invalid_format("question_id", format!("'{}'", s)))?;
        QuestionId::new(number)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

/// One question of the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub number: u8,
    pub category: Category,
    /// Relative importance inside its category (1-3).
    pub weight: u8,
    pub prompt: &'static str,
}

impl Question {
    /// Typed identifier for this question.
    pub fn id(&self) -> QuestionId {
        QuestionId(self.number)
    }
}

const fn q(number: u8, category: Category, weight: u8, prompt: &'static str) -> Question {
    Question {
        number,
        category,
        weight,
        prompt,
    }
}

use Category::*;

/// The question schema in number order.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, BusinessFoundation, 3, "Leadership has a written vision for how AI supports the business strategy"),
    q(2, BusinessFoundation, 2, "AI initiatives have an allocated budget"),
    q(3, BusinessFoundation, 2, "Business processes are documented and standardized"),
    q(4, BusinessFoundation, 1, "Core KPIs are measured and reviewed regularly"),
    q(5, BusinessFoundation, 2, "The business model can absorb process changes driven by automation"),
    q(6, BusinessFoundation, 1, "Customer and market feedback is collected systematically"),
    q(7, BusinessFoundation, 2, "Investment decisions use quantified return estimates"),
    q(8, BusinessFoundation, 1, "External partners or advisors support digital initiatives"),
    q(9, CurrentAiUse, 3, "AI tools are used in day-to-day operations"),
    q(10, CurrentAiUse, 2, "Generative AI is used for document or content work"),
    q(11, CurrentAiUse, 2, "At least one AI pilot has moved into production"),
    q(12, CurrentAiUse, 1, "AI usage is tracked across departments"),
    q(13, CurrentAiUse, 2, "AI-driven results are measured against a baseline"),
    q(14, CurrentAiUse, 1, "Employees share AI use cases internally"),
    q(15, CurrentAiUse, 2, "AI supports customer-facing services"),
    q(16, CurrentAiUse, 1, "Prediction or recommendation models inform decisions"),
    q(17, OrganizationReadiness, 3, "A named owner is accountable for AI adoption"),
    q(18, OrganizationReadiness, 2, "Teams are willing to change workflows for AI"),
    q(19, OrganizationReadiness, 2, "An AI usage policy or guideline exists"),
    q(20, OrganizationReadiness, 1, "Cross-department collaboration on projects is routine"),
    q(21, OrganizationReadiness, 2, "Failed experiments are tolerated and reviewed"),
    q(22, OrganizationReadiness, 1, "Decision making is data-driven rather than intuition-driven"),
    q(23, OrganizationReadiness, 2, "Change management practices accompany new tools"),
    q(24, OrganizationReadiness, 1, "Security and compliance reviews cover AI use"),
    q(25, TechnologyInfrastructure, 3, "Core systems run on cloud or modern infrastructure"),
    q(26, TechnologyInfrastructure, 2, "Systems expose APIs for integration"),
    q(27, TechnologyInfrastructure, 2, "ERP/CRM or equivalent systems are in place"),
    q(28, TechnologyInfrastructure, 1, "Compute resources for AI workloads are available"),
    q(29, TechnologyInfrastructure, 2, "Information security controls are mature"),
    q(30, TechnologyInfrastructure, 1, "IT operations are monitored and automated"),
    q(31, TechnologyInfrastructure, 1, "Collaboration tooling is standardized"),
    q(32, DataManagement, 3, "Business data is collected in digital form"),
    q(33, DataManagement, 2, "Data is stored in an integrated, searchable repository"),
    q(34, DataManagement, 2, "Data quality is checked and maintained"),
    q(35, DataManagement, 1, "Data ownership and access rights are defined"),
    q(36, DataManagement, 2, "Historical data covers several years of operations"),
    q(37, DataManagement, 1, "Dashboards or reports are generated automatically"),
    q(38, DataManagement, 1, "Personal data handling complies with regulation"),
    q(39, HumanResources, 3, "Staff with AI or data skills are on the team"),
    q(40, HumanResources, 2, "Employees receive AI literacy training"),
    q(41, HumanResources, 2, "Leadership personally uses AI tools"),
    q(42, HumanResources, 1, "Hiring plans include digital or AI roles"),
    q(43, HumanResources, 2, "Employees are rewarded for process improvements"),
    q(44, HumanResources, 1, "External AI education programs are used"),
    q(45, HumanResources, 1, "Internal champions promote AI adoption"),
];

/// Looks up the question for an id.
pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_numbers_match_positions() {
        for (idx, question) in QUESTIONS.iter().enumerate() {
            assert_eq!(question.number as usize, idx + 1);
        }
    }

    #[test]
    fn schema_distributes_questions_across_categories() {
        let counts: Vec<usize> = Category::ALL.iter().map(|c| c.question_count()).collect();
        assert_eq!(counts, vec![8, 8, 8, 7, 7, 7]);
        assert_eq!(counts.iter().sum::<usize>(), QUESTION_COUNT);
    }

    #[test]
    fn weights_stay_in_range() {
        assert!(QUESTIONS.iter().all(|q| (1..=3).contains(&q.weight)));
    }

    #[test]
    fn question_id_parses_prefixed_and_bare() {
        assert_eq!("q12".parse::<QuestionId>().unwrap().number(), 12);
        assert_eq!("Q1".parse::<QuestionId>().unwrap().number(), 1);
        assert_eq!(" 45 ".parse::<QuestionId>().unwrap().number(), 45);
    }

    #[test]
    fn question_id_rejects_outside_schema() {
        assert!("q0".parse::<QuestionId>().is_err());
        assert!("q46".parse::<QuestionId>().is_err());
        assert!("question".parse::<QuestionId>().is_err());
    }

    #[test]
    fn question_id_serializes_as_prefixed_string() {
        let id = QuestionId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q7\"");
    }

    #[test]
    fn category_ordinals_follow_declared_order() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.ordinal(), idx);
        }
    }

    #[test]
    fn lookup_returns_matching_question() {
        let id = QuestionId::new(32).unwrap();
        assert_eq!(question(id).category, Category::DataManagement);
    }
}

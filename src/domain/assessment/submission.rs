//! Submission value object - the validated self-assessment input.
//!
//! Loosely-typed payloads (`RawSubmission`) are converted exactly once at the
//! boundary. Conversion never fails: out-of-range answers clamp into
//! `1..=5`, missing answers default to the minimum, and every repair is
//! recorded in [`InputDefects`] for logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use super::question::{QuestionId, MAX_ANSWER, MIN_ANSWER, QUESTION_COUNT};
use crate::domain::benchmark::IndustryId;

/// Name used when the submission carries none.
pub const UNNAMED_COMPANY: &str = "Your Company";

/// A single answer on the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerValue(u8);

impl AnswerValue {
    /// The value used for unanswered questions.
    pub const DEFAULT: Self = Self(MIN_ANSWER);

    /// Clamps any integer into the answer range.
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(MIN_ANSWER as i64, MAX_ANSWER as i64) as u8)
    }

    /// Returns true if `raw` is already inside the answer range.
    pub fn is_in_range(raw: i64) -> bool {
        (MIN_ANSWER as i64..=MAX_ANSWER as i64).contains(&raw)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for AnswerValue {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Employee-count bucket of the submitting company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCountBucket {
    UpTo10,
    UpTo50,
    UpTo300,
    UpTo1000,
    Over1000,
    #[default]
    Unknown,
}

impl EmployeeCountBucket {
    /// Parses form labels such as `"11-50"`, `"1000+"` or `"up_to_300"`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "up_to10" | "up_to_10" | "1-10" | "~10" => return Self::UpTo10,
            "up_to50" | "up_to_50" | "11-50" | "~50" => return Self::UpTo50,
            "up_to300" | "up_to_300" | "51-300" | "~300" => return Self::UpTo300,
            "up_to1000" | "up_to_1000" | "301-1000" | "~1000" => return Self::UpTo1000,
            "over1000" | "over_1000" | "1000+" | "1001+" => return Self::Over1000,
            _ => {}
        }
        // Fall back to the upper bound of a free-form range. Open-ended
        // labels ("over 1,000", "500+") sit above their number.
        let digits = strip_thousands_separators(&normalized);
        let open_ended = digits.contains('+')
            || digits.starts_with('>')
            || digits.starts_with("over")
            || digits.contains("more than");
        let upper = digits
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse::<u32>().ok())
            .last()
            .map(|n| if open_ended { n.saturating_add(1) } else { n });
        match upper {
            Some(n) if n <= 10 => Self::UpTo10,
            Some(n) if n <= 50 => Self::UpTo50,
            Some(n) if n <= 300 => Self::UpTo300,
            Some(n) if n <= 1000 => Self::UpTo1000,
            Some(_) => Self::Over1000,
            None => Self::Unknown,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo10 => "1-10 employees",
            Self::UpTo50 => "11-50 employees",
            Self::UpTo300 => "51-300 employees",
            Self::UpTo1000 => "301-1,000 employees",
            Self::Over1000 => "over 1,000 employees",
            Self::Unknown => "undisclosed headcount",
        }
    }
}

/// Annual revenue bucket of the submitting company (USD).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueBucket {
    Under1M,
    From1MTo10M,
    From10MTo100M,
    Over100M,
    #[default]
    Unknown,
}

impl RevenueBucket {
    /// Parses form labels such as `"under_1m"`, `"10m-100m"` or `"100m+"`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
            .collect();
        let normalized = normalized.strip_suffix("revenue").unwrap_or(&normalized);
        match normalized {
            "under1m" | "under_1m" | "<1m" | "0-1m" => Self::Under1M,
            "from1mto10m" | "from_1m_to_10m" | "1m-10m" => Self::From1MTo10M,
            "from10mto100m" | "from_10m_to_100m" | "10m-100m" => Self::From10MTo100M,
            "over100m" | "over_100m" | "100m+" | ">100m" => Self::Over100M,
            _ => Self::Unknown,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Under1M => "under $1M revenue",
            Self::From1MTo10M => "$1M-$10M revenue",
            Self::From10MTo100M => "$10M-$100M revenue",
            Self::Over100M => "over $100M revenue",
            Self::Unknown => "undisclosed revenue",
        }
    }
}

/// Identity of the submitting company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: IndustryId,
    pub employee_count: EmployeeCountBucket,
    pub revenue: RevenueBucket,
}

impl CompanyProfile {
    /// Creates a profile, substituting a placeholder for a blank name.
    pub fn new(
        name: impl Into<String>,
        industry: IndustryId,
        employee_count: EmployeeCountBucket,
        revenue: RevenueBucket,
    ) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            UNNAMED_COMPANY.to_string()
        } else {
            name.trim().to_string()
        };
        Self {
            name,
            industry,
            employee_count,
            revenue,
        }
    }
}

/// Repairs applied while building a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefects {
    /// Answers that were outside `1..=5` and got clamped.
    pub clamped: Vec<QuestionId>,
    /// Questions with no usable answer that got the default.
    pub defaulted: Vec<QuestionId>,
    /// Answer keys that did not name a schema question.
    pub ignored_keys: Vec<String>,
}

impl InputDefects {
    /// Returns true if no repair was needed.
    pub fn is_clean(&self) -> bool {
        self.clamped.is_empty() && self.defaulted.is_empty() && self.ignored_keys.is_empty()
    }
}

/// The loosely-typed inbound payload, as the web form posts it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default, alias = "companyName")]
    pub company_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, alias = "employeeCount", alias = "employees")]
    pub employee_count: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub answers: HashMap<String, Value>,
    #[serde(default)]
    pub challenges: String,
    #[serde(default, alias = "expectedBenefits")]
    pub expected_benefits: String,
}

/// A validated, immutable self-assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    company: CompanyProfile,
    answers: [AnswerValue; QUESTION_COUNT],
    challenges: String,
    expected_benefits: String,
    defects: InputDefects,
}

impl Submission {
    /// Builds a submission from typed answers.
    ///
    /// Later duplicates of the same question overwrite earlier ones.
    pub fn new(
        company: CompanyProfile,
        answers: impl IntoIterator<Item = (QuestionId, i64)>,
        challenges: impl Into<String>,
        expected_benefits: impl Into<String>,
    ) -> Self {
        let mut slots: [Option<i64>; QUESTION_COUNT] = [None; QUESTION_COUNT];

        for (id, raw) in answers {
            slots[id.index()] = Some(raw);
        }

        Self::from_slots(
            company,
            slots,
            InputDefects::default(),
            challenges.into(),
            expected_benefits.into(),
        )
    }

    /// Converts the inbound payload. Never fails.
    ///
    /// When both `12` and `q12` are present, `q12` wins.
    pub fn from_raw(raw: RawSubmission) -> Self {
        let company = CompanyProfile::new(
            raw.company_name,
            IndustryId::parse(&raw.industry),
            EmployeeCountBucket::from_label(&raw.employee_count),
            RevenueBucket::from_label(&raw.revenue),
        );

        let mut slots: [Option<i64>; QUESTION_COUNT] = [None; QUESTION_COUNT];
        let mut defects = InputDefects::default();

        let mut keys: Vec<&String> = raw.answers.keys().collect();
        keys.sort();
        for key in keys {
            let Ok(id) = key.parse::<QuestionId>() else {
                defects.ignored_keys.push(key.clone());
                continue;
            };
            // Unparseable values fall through to the default below.
            let Some(number) = answer_number(&raw.answers[key]) else {
                continue;
            };
            slots[id.index()] = Some(number);
        }

        Self::from_slots(company, slots, defects, raw.challenges, raw.expected_benefits)
    }

    fn from_slots(
        company: CompanyProfile,
        slots: [Option<i64>; QUESTION_COUNT],
        mut defects: InputDefects,
        challenges: String,
        expected_benefits: String,
    ) -> Self {
        // Only the value that is kept counts as a repair.
        let mut answers = [AnswerValue::DEFAULT; QUESTION_COUNT];
        for id in QuestionId::all() {
            match slots[id.index()] {
                Some(raw) => {
                    if !AnswerValue::is_in_range(raw) {
                        defects.clamped.push(id);
                    }
                    answers[id.index()] = AnswerValue::clamped(raw);
                }
                None => defects.defaulted.push(id),
            }
        }

        Self {
            company,
            answers,
            challenges: challenges.trim().to_string(),
            expected_benefits: expected_benefits.trim().to_string(),
            defects,
        }
    }

    /// The submitting company.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// The answer for a question.
    pub fn answer(&self, id: QuestionId) -> AnswerValue {
        self.answers[id.index()]
    }

    /// Free-text description of current challenges (may be empty).
    pub fn challenges(&self) -> &str {
        &self.challenges
    }

    /// Free-text description of expected benefits (may be empty).
    pub fn expected_benefits(&self) -> &str {
        &self.expected_benefits
    }

    /// Repairs applied while building this submission.
    pub fn defects(&self) -> &InputDefects {
        &self.defects
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.company.name, self.company.industry)
    }
}

/// Reads an answer encoded as a JSON number or numeric string.
/// Drops commas that sit between two digits, so `1,000` reads as `1000`.
fn strip_thousands_separators(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, c)| {
            !(*c == ','
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit()))
        })
        .map(|(_, c)| *c)
        .collect()
}

fn answer_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> CompanyProfile {
        CompanyProfile::new(
            "Acme",
            IndustryId::parse("manufacturing"),
            EmployeeCountBucket::UpTo50,
            RevenueBucket::From1MTo10M,
        )
    }

    fn qid(n: u8) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn answer_value_clamps_into_range() {
        assert_eq!(AnswerValue::clamped(0).value(), 1);
        assert_eq!(AnswerValue::clamped(-7).value(), 1);
        assert_eq!(AnswerValue::clamped(3).value(), 3);
        assert_eq!(AnswerValue::clamped(9).value(), 5);
    }

    #[test]
    fn complete_answers_have_no_defects() {
        let submission = Submission::new(profile(), QuestionId::all().map(|id| (id, 4)), "", "");
        assert!(submission.defects().is_clean());
        assert_eq!(submission.answer(qid(45)).value(), 4);
    }

    #[test]
    fn missing_answers_default_to_minimum() {
        let submission = Submission::new(profile(), vec![(qid(1), 5)], "", "");
        assert_eq!(submission.answer(qid(1)).value(), 5);
        assert_eq!(submission.answer(qid(2)), AnswerValue::DEFAULT);
        assert_eq!(submission.defects().defaulted.len(), 44);
    }

    #[test]
    fn out_of_range_answers_are_clamped_and_recorded() {
        let answers = QuestionId::all().map(|id| (id, if id.number() == 3 { 12 } else { 3 }));
        let submission = Submission::new(profile(), answers, "", "");
        assert_eq!(submission.answer(qid(3)).value(), 5);
        assert_eq!(submission.defects().clamped, vec![qid(3)]);
    }

    #[test]
    fn overwritten_out_of_range_answer_is_not_recorded() {
        let answers = QuestionId::all()
            .map(|id| (id, 3))
            .chain([(qid(7), 9), (qid(7), 2)]);
        let submission = Submission::new(profile(), answers, "", "");
        assert_eq!(submission.answer(qid(7)).value(), 2);
        assert!(submission.defects().clamped.is_empty());
    }

    #[test]
    fn from_raw_records_clamp_only_for_kept_duplicate() {
        let raw: RawSubmission = serde_json::from_value(json!({
            "answers": { "1": 9, "q1": 3, "2": 2, "q2": 0 }
        }))
        .unwrap();

        let submission = Submission::from_raw(raw);

        assert_eq!(submission.answer(qid(1)).value(), 3);
        assert_eq!(submission.answer(qid(2)).value(), 1);
        assert_eq!(submission.defects().clamped, vec![qid(2)]);
    }

    #[test]
    fn from_raw_accepts_loose_payload() {
        let raw: RawSubmission = serde_json::from_value(json!({
            "companyName": "  Blue Ocean Ltd ",
            "industry": "IT/Software",
            "employeeCount": "51-300",
            "revenue": "10m-100m",
            "answers": { "q1": 4, "2": "5", "q3": 0, "q99": 3, "q4": "n/a", "q5": 3.6 },
            "challenges": "Legacy ERP",
            "expectedBenefits": "Faster reporting"
        }))
        .unwrap();

        let submission = Submission::from_raw(raw);

        assert_eq!(submission.company().name, "Blue Ocean Ltd");
        assert_eq!(submission.company().industry.as_str(), "it_software");
        assert_eq!(submission.company().employee_count, EmployeeCountBucket::UpTo300);
        assert_eq!(submission.company().revenue, RevenueBucket::From10MTo100M);
        assert_eq!(submission.answer(qid(1)).value(), 4);
        assert_eq!(submission.answer(qid(2)).value(), 5);
        assert_eq!(submission.answer(qid(3)).value(), 1);
        assert_eq!(submission.answer(qid(4)), AnswerValue::DEFAULT);
        assert_eq!(submission.answer(qid(5)).value(), 4);
        assert_eq!(submission.defects().clamped, vec![qid(3)]);
        assert_eq!(submission.defects().ignored_keys, vec!["q99".to_string()]);
        assert!(submission.defects().defaulted.contains(&qid(4)));
        assert_eq!(submission.challenges(), "Legacy ERP");
    }

    #[test]
    fn from_raw_of_empty_payload_still_builds() {
        let submission = Submission::from_raw(RawSubmission::default());
        assert_eq!(submission.company().name, UNNAMED_COMPANY);
        assert_eq!(submission.company().industry, IndustryId::other());
        assert_eq!(submission.defects().defaulted.len(), QUESTION_COUNT);
    }

    #[test]
    fn employee_bucket_parses_common_labels() {
        assert_eq!(EmployeeCountBucket::from_label("1-10"), EmployeeCountBucket::UpTo10);
        assert_eq!(EmployeeCountBucket::from_label("1000+"), EmployeeCountBucket::Over1000);
        assert_eq!(EmployeeCountBucket::from_label("about 200 people"), EmployeeCountBucket::UpTo300);
        assert_eq!(EmployeeCountBucket::from_label("5000"), EmployeeCountBucket::Over1000);
        assert_eq!(EmployeeCountBucket::from_label(""), EmployeeCountBucket::Unknown);
    }

    #[test]
    fn employee_bucket_reads_thousands_separators() {
        assert_eq!(EmployeeCountBucket::from_label("301-1,000"), EmployeeCountBucket::UpTo1000);
        assert_eq!(EmployeeCountBucket::from_label("over 1,000"), EmployeeCountBucket::Over1000);
        assert_eq!(EmployeeCountBucket::from_label("2,500"), EmployeeCountBucket::Over1000);
        assert_eq!(EmployeeCountBucket::from_label("500+"), EmployeeCountBucket::UpTo1000);
    }

    #[test]
    fn employee_bucket_parses_its_own_labels() {
        for bucket in [
            EmployeeCountBucket::UpTo10,
            EmployeeCountBucket::UpTo50,
            EmployeeCountBucket::UpTo300,
            EmployeeCountBucket::UpTo1000,
            EmployeeCountBucket::Over1000,
            EmployeeCountBucket::Unknown,
        ] {
            assert_eq!(EmployeeCountBucket::from_label(bucket.label()), bucket, "{}", bucket.label());
        }
    }

    #[test]
    fn revenue_bucket_parses_its_own_labels() {
        for bucket in [
            RevenueBucket::Under1M,
            RevenueBucket::From1MTo10M,
            RevenueBucket::From10MTo100M,
            RevenueBucket::Over100M,
            RevenueBucket::Unknown,
        ] {
            assert_eq!(RevenueBucket::from_label(bucket.label()), bucket, "{}", bucket.label());
        }
    }

    #[test]
    fn revenue_bucket_parses_common_labels() {
        assert_eq!(RevenueBucket::from_label("Under 1M"), RevenueBucket::Under1M);
        assert_eq!(RevenueBucket::from_label("$100M+"), RevenueBucket::Over100M);
        assert_eq!(RevenueBucket::from_label("lots"), RevenueBucket::Unknown);
    }
}

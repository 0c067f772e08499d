//! Industry Benchmark Store - read-only keyed table of benchmark records.
//!
//! Built once at process start (from the built-in table, optionally
//! overlaid with a YAML file) and shared across diagnosis runs without
//! locking. There is no runtime write path.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::industry::{IndustryBenchmark, IndustryId, GENERIC_INDUSTRY};
use crate::domain::foundation::Percentage;

/// Errors raised while loading benchmark overrides.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("failed to read benchmark file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse benchmark data: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid benchmark for '{industry}': {reason}")]
    Invalid { industry: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct BenchmarkFile {
    benchmarks: Vec<IndustryBenchmark>,
}

/// Keyed table of industry benchmarks with a guaranteed generic entry.
#[derive(Debug, Clone)]
pub struct IndustryBenchmarkStore {
    records: HashMap<IndustryId, IndustryBenchmark>,
}

static BUILTIN: Lazy<IndustryBenchmarkStore> = Lazy::new(|| IndustryBenchmarkStore {
    records: builtin_records()
        .into_iter()
        .map(|record| (record.industry.clone(), record))
        .collect(),
});

impl IndustryBenchmarkStore {
    /// The built-in table.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Built-in table overlaid with records from a YAML document.
    ///
    /// Records replace built-in entries with the same identifier and add
    /// new ones. The document has the shape `benchmarks: [ ... ]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BenchmarkError> {
        let file: BenchmarkFile = serde_yaml::from_str(yaml)?;
        let mut store = Self::builtin();
        for record in file.benchmarks {
            validate(&record)?;
            store.records.insert(record.industry.clone(), record);
        }
        Ok(store)
    }

    /// Built-in table overlaid with records from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, BenchmarkError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Exact-match lookup, falling back to the generic record.
    pub fn lookup(&self, industry: &IndustryId) -> &IndustryBenchmark {
        self.records
            .get(industry)
            .unwrap_or_else(|| self.generic())
    }

    /// Normalizes a raw identifier and looks it up.
    pub fn lookup_str(&self, raw: &str) -> &IndustryBenchmark {
        self.lookup(&IndustryId::parse(raw))
    }

    /// Returns true if the identifier has its own record.
    pub fn contains(&self, industry: &IndustryId) -> bool {
        self.records.contains_key(industry)
    }

    /// The generic record.
    pub fn generic(&self) -> &IndustryBenchmark {
        match self.records.get(&IndustryId::other()) {
            Some(record) => record,
            None => &GENERIC,
        }
    }

    /// Identifiers with their own record, sorted.
    pub fn industries(&self) -> Vec<&IndustryId> {
        let mut ids: Vec<&IndustryId> = self.records.keys().collect();
        ids.sort();
        ids
    }
}

impl Default for IndustryBenchmarkStore {
    fn default() -> Self {
        Self::builtin()
    }
}

static GENERIC: Lazy<IndustryBenchmark> = Lazy::new(|| {
    builtin_records()
        .into_iter()
        .find(|record| record.industry.as_str() == GENERIC_INDUSTRY)
        .unwrap_or_else(generic_record)
});

fn validate(record: &IndustryBenchmark) -> Result<(), BenchmarkError> {
    let invalid = |reason: &str| BenchmarkError::Invalid {
        industry: record.industry.to_string(),
        reason: reason.to_string(),
    };
    if record.bottom_decile_score > record.average_score
        || record.average_score > record.top_decile_score
    {
        return Err(invalid("expected bottom_decile <= average <= top_decile"));
    }
    if record.top_decile_score > 225 {
        return Err(invalid("scores must not exceed 225"));
    }
    if record.trends.is_empty() {
        return Err(invalid("at least one trend is required"));
    }
    if record.insight.trim().is_empty() {
        return Err(invalid("insight cannot be empty"));
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    display_name: &str,
    (average, top, bottom): (u32, u32, u32),
    adoption: u8,
    growth_insight: &str,
    trends: [&str; 3],
    insight: &str,
    key_use_cases: [&str; 3],
) -> IndustryBenchmark {
    IndustryBenchmark {
        industry: IndustryId::parse(id),
        display_name: display_name.to_string(),
        average_score: average,
        top_decile_score: top,
        bottom_decile_score: bottom,
        adoption_rate: Percentage::new(adoption),
        growth_insight: growth_insight.to_string(),
        trends: trends.iter().map(|t| t.to_string()).collect(),
        insight: insight.to_string(),
        key_use_cases: key_use_cases.iter().map(|u| u.to_string()).collect(),
    }
}

fn generic_record() -> IndustryBenchmark {
    record(
        GENERIC_INDUSTRY,
        "General Industry",
        (125, 175, 85),
        35,
        "Companies that adopt AI in at least one core process report 10-20% productivity gains within two years",
        [
            "generative AI for document and knowledge work",
            "workflow automation across back-office functions",
            "data-driven decision support for management",
        ],
        "Across industries the gap between AI adopters and non-adopters is widening, and early movers compound their advantage through data and skills",
        [
            "document drafting and summarization",
            "customer inquiry handling",
            "sales and demand forecasting",
        ],
    )
}

fn builtin_records() -> Vec<IndustryBenchmark> {
    vec![
        record(
            "it_software",
            "IT & Software",
            (158, 201, 112),
            62,
            "Software firms using AI coding and operations tools report 20-35% faster delivery cycles",
            [
                "AI-assisted software development and testing",
                "AI features embedded directly into products",
                "automated IT operations and incident response",
            ],
            "AI capability is becoming table stakes in software; differentiation is shifting to proprietary data and AI-native product design",
            [
                "code generation and review",
                "intelligent customer support",
                "usage analytics and churn prediction",
            ],
        ),
        record(
            "finance",
            "Finance & Insurance",
            (150, 195, 105),
            55,
            "Financial institutions applying AI to risk and operations cut processing costs by 15-25%",
            [
                "AI-based credit and fraud risk scoring",
                "personalized advisory and robo-advice",
                "regulatory reporting automation",
            ],
            "Finance leads in data maturity but faces strict model governance requirements; explainability is a competitive factor",
            [
                "fraud detection",
                "document review for underwriting",
                "customer service automation",
            ],
        ),
        record(
            "manufacturing",
            "Manufacturing",
            (128, 178, 88),
            38,
            "Manufacturers deploying predictive maintenance and vision inspection reduce downtime by 20-30%",
            [
                "predictive maintenance from equipment sensor data",
                "computer-vision quality inspection",
                "demand-driven production planning",
            ],
            "Smart-factory adoption is accelerating, but most manufacturers remain limited by fragmented shop-floor data",
            [
                "defect detection",
                "equipment failure prediction",
                "inventory and supply optimization",
            ],
        ),
        record(
            "retail",
            "Retail & Commerce",
            (134, 182, 92),
            41,
            "Retailers using AI personalization and demand forecasting see 5-15% revenue uplift",
            [
                "hyper-personalized recommendations and marketing",
                "AI demand forecasting and dynamic pricing",
                "conversational commerce and shopping assistants",
            ],
            "Customer expectations for personalization are rising fast, and retailers without first-party data strategies fall behind",
            [
                "product recommendations",
                "demand forecasting",
                "marketing content generation",
            ],
        ),
        record(
            "healthcare",
            "Healthcare & Life Sciences",
            (130, 180, 90),
            36,
            "Providers using AI for documentation and triage free up 15-20% of clinical staff time",
            [
                "clinical documentation assistants",
                "AI-supported diagnostics and imaging",
                "patient flow and scheduling optimization",
            ],
            "Healthcare AI adoption is constrained by privacy regulation, so compliant data infrastructure is the main differentiator",
            [
                "medical record summarization",
                "appointment and capacity planning",
                "imaging analysis support",
            ],
        ),
        record(
            "construction",
            "Construction & Real Estate",
            (112, 160, 76),
            24,
            "Construction firms applying AI to estimation and safety monitoring cut rework costs by 10-15%",
            [
                "AI-based cost estimation and bidding",
                "site safety monitoring with computer vision",
                "digital twins for project planning",
            ],
            "Construction is an early-stage AI market where modest investments still produce visible differentiation",
            [
                "quantity take-off and estimation",
                "safety incident detection",
                "schedule risk prediction",
            ],
        ),
        record(
            "logistics",
            "Logistics & Transportation",
            (124, 172, 85),
            33,
            "Logistics operators using AI routing and forecasting reduce transport costs by 8-12%",
            [
                "AI route and load optimization",
                "real-time shipment visibility and ETA prediction",
                "warehouse automation and robotics",
            ],
            "Margins in logistics are thin, so AI-driven efficiency gains translate directly into competitive pricing power",
            [
                "route optimization",
                "demand and volume forecasting",
                "automated dispatch",
            ],
        ),
        record(
            "education",
            "Education",
            (120, 168, 82),
            30,
            "Institutions using AI tutoring and administrative automation report 10-20% staff time savings",
            [
                "adaptive learning and AI tutoring",
                "automated grading and feedback",
                "administrative workflow automation",
            ],
            "Learners increasingly expect AI-supported personalization, raising the bar for traditional education providers",
            [
                "personalized learning paths",
                "content creation",
                "student support chatbots",
            ],
        ),
        record(
            "public_sector",
            "Public Sector",
            (116, 162, 80),
            27,
            "Public agencies automating citizen services report 20-40% faster case handling",
            [
                "AI-assisted citizen service channels",
                "document and case processing automation",
                "data-driven policy analysis",
            ],
            "Public-sector AI is driven by service quality mandates, with procurement and accountability shaping the pace of adoption",
            [
                "inquiry routing",
                "document classification",
                "fraud and anomaly detection",
            ],
        ),
        generic_record(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_contains_generic_record() {
        let store = IndustryBenchmarkStore::builtin();
        assert!(store.contains(&IndustryId::other()));
        assert_eq!(store.generic().industry, IndustryId::other());
    }

    #[test]
    fn lookup_finds_exact_match() {
        let store = IndustryBenchmarkStore::builtin();
        let benchmark = store.lookup_str("IT/software");
        assert_eq!(benchmark.industry.as_str(), "it_software");
        assert_eq!(benchmark.average_score, 158);
    }

    #[test]
    fn unknown_identifier_falls_back_to_generic() {
        let store = IndustryBenchmarkStore::builtin();
        let benchmark = store.lookup_str("xyz-unlisted");
        assert_eq!(benchmark.industry, IndustryId::other());
    }

    #[test]
    fn builtin_records_are_internally_consistent() {
        let store = IndustryBenchmarkStore::builtin();
        for id in store.industries() {
            let record = store.lookup(id);
            assert!(validate(record).is_ok(), "invalid record: {}", id);
            assert_eq!(record.trends.len(), 3);
        }
        assert_eq!(store.industries().len(), 10);
    }

    #[test]
    fn yaml_overrides_replace_and_add_records() {
        let yaml = r#"
benchmarks:
  - industry: retail
    display_name: Retail (2025 survey)
    average_score: 140
    top_decile_score: 190
    bottom_decile_score: 95
    adoption_rate: 45
    growth_insight: Updated growth insight
    trends: ["retail media networks"]
    insight: Updated retail insight
    key_use_cases: ["pricing"]
  - industry: Agriculture
    display_name: Agriculture
    average_score: 100
    top_decile_score: 150
    bottom_decile_score: 70
    adoption_rate: 15
    growth_insight: Precision farming pays back quickly
    trends: ["precision farming"]
    insight: Agriculture is early in AI adoption
    key_use_cases: ["yield prediction"]
"#;
        let store = IndustryBenchmarkStore::from_yaml_str(yaml).unwrap();
        assert_eq!(store.lookup_str("retail").average_score, 140);
        assert_eq!(store.lookup_str("agriculture").display_name, "Agriculture");
        assert_eq!(store.lookup_str("finance").average_score, 150);
    }

    #[test]
    fn yaml_with_inverted_scores_is_rejected() {
        let yaml = r#"
benchmarks:
  - industry: retail
    display_name: Retail
    average_score: 200
    top_decile_score: 150
    bottom_decile_score: 95
    adoption_rate: 45
    growth_insight: x
    trends: ["a"]
    insight: y
    key_use_cases: []
"#;
        let err = IndustryBenchmarkStore::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BenchmarkError::Invalid { .. }));
    }

    #[test]
    fn adoption_rate_above_100_is_a_parse_error() {
        let yaml = r#"
benchmarks:
  - industry: retail
    display_name: Retail
    average_score: 130
    top_decile_score: 180
    bottom_decile_score: 90
    adoption_rate: 250
    growth_insight: x
    trends: ["a"]
    insight: y
    key_use_cases: []
"#;
        let err = IndustryBenchmarkStore::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, BenchmarkError::Parse(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = IndustryBenchmarkStore::from_yaml_str("benchmarks: [").unwrap_err();
        assert!(matches!(err, BenchmarkError::Parse(_)));
    }

    #[test]
    fn loads_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "benchmarks:\n  - industry: education\n    display_name: Education\n    average_score: 121\n    top_decile_score: 169\n    bottom_decile_score: 83\n    adoption_rate: 31\n    growth_insight: g\n    trends: [\"t\"]\n    insight: i\n    key_use_cases: []"
        )
        .unwrap();

        let store = IndustryBenchmarkStore::from_yaml_file(file.path()).unwrap();
        assert_eq!(store.lookup_str("education").average_score, 121);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = IndustryBenchmarkStore::from_yaml_file("/nonexistent/benchmarks.yaml").unwrap_err();
        assert!(matches!(err, BenchmarkError::Io(_)));
    }
}

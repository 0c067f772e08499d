//! Structured narrative returned by an enrichment provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing an enrichment payload.
#[derive(Debug, Error)]
pub enum NarrativeParseError {
    #[error("no JSON object found in payload")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload contains no narrative text")]
    Empty,
}

/// Narrative overlay for the executive summary, findings and recommendations.
///
/// Providers are asked to answer with a JSON object of this shape. Missing
/// fields default to empty and are left to the local text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichedNarrative {
    #[serde(alias = "executiveSummary")]
    pub executive_summary: String,
    #[serde(alias = "keyFindings")]
    pub key_findings: Vec<String>,
    #[serde(alias = "strategicRecommendations", alias = "recommendations")]
    pub strategic_recommendations: Vec<String>,
}

impl EnrichedNarrative {
    /// Parses provider output, tolerating Markdown code fences and prose
    /// around the JSON object.
    pub fn parse(content: &str) -> Result<Self, NarrativeParseError> {
        let json = extract_json_object(content).ok_or(NarrativeParseError::NoJsonObject)?;
        let mut narrative: EnrichedNarrative = serde_json::from_str(json)?;
        narrative.normalize();
        if narrative.is_empty() {
            return Err(NarrativeParseError::Empty);
        }
        Ok(narrative)
    }

    /// Returns true if no field carries text.
    pub fn is_empty(&self) -> bool {
        self.executive_summary.is_empty()
            && self.key_findings.is_empty()
            && self.strategic_recommendations.is_empty()
    }

    fn normalize(&mut self) {
        self.executive_summary = self.executive_summary.trim().to_string();
        for list in [&mut self.key_findings, &mut self.strategic_recommendations] {
            list.iter_mut().for_each(|item| *item = item.trim().to_string());
            list.retain(|item| !item.is_empty());
        }
    }
}

/// Slice from the first `{` to the last `}`.
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (start < end).then(|| &content[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let narrative = EnrichedNarrative::parse(
            r#"{"executive_summary": "Summary", "key_findings": ["a"], "strategic_recommendations": ["b"]}"#,
        )
        .unwrap();
        assert_eq!(narrative.executive_summary, "Summary");
        assert_eq!(narrative.key_findings, vec!["a"]);
        assert_eq!(narrative.strategic_recommendations, vec!["b"]);
    }

    #[test]
    fn parses_fenced_json_with_camel_case_keys() {
        let content = "Here is the analysis:\n```json\n{\"executiveSummary\": \" Text \", \"keyFindings\": [\" x \", \"\"]}\n```\n";
        let narrative = EnrichedNarrative::parse(content).unwrap();
        assert_eq!(narrative.executive_summary, "Text");
        assert_eq!(narrative.key_findings, vec!["x"]);
        assert!(narrative.strategic_recommendations.is_empty());
    }

    #[test]
    fn rejects_prose_without_json() {
        let err = EnrichedNarrative::parse("I cannot help with that.").unwrap_err();
        assert!(matches!(err, NarrativeParseError::NoJsonObject));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = EnrichedNarrative::parse("{ not json }").unwrap_err();
        assert!(matches!(err, NarrativeParseError::Json(_)));
    }

    #[test]
    fn rejects_empty_narrative() {
        let err = EnrichedNarrative::parse(r#"{"executive_summary": "  "}"#).unwrap_err();
        assert!(matches!(err, NarrativeParseError::Empty));
    }
}

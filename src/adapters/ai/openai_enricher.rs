//! OpenAI Enricher - EnrichmentProvider over the OpenAI Chat Completions API.
//!
//! Requests JSON-object output so the answer parses directly into the
//! enrichment narrative.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http::{build_client, check_status, map_send_error};
use crate::ports::{
    EnrichmentError, EnrichmentProvider, EnrichmentResponse, PromptContext, ProviderInfo,
};

/// Default model when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Configuration for the OpenAI enricher.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o", "gpt-4-turbo").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
            max_tokens: 2048,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI Chat Completions enricher.
pub struct OpenAIEnricher {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIEnricher {
    /// Creates a new enricher.
    pub fn new(config: OpenAIConfig) -> Result<Self, EnrichmentError> {
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_openai_request(&self, context: &PromptContext) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: context.system_prompt(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: context.user_prompt(),
                },
            ],
            max_tokens: Some(self.config.max_tokens),
            temperature: Some(0.3),
            response_format: Some(ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        }
    }
}

#[async_trait]
impl EnrichmentProvider for OpenAIEnricher {
    async fn enrich(&self, context: &PromptContext) -> Result<EnrichmentResponse, EnrichmentError> {
        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_openai_request(context))
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;

        let response = check_status(response, 30).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| EnrichmentError::parse(format!("Failed to parse response: {}", e)))?;

        let content = openai_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| EnrichmentError::parse("No choices in response"))?;

        Ok(EnrichmentResponse::new(content, openai_response.model))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", &self.config.model)
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OpenAIConfig {
        OpenAIConfig::new(Secret::new("sk-test".to_string()))
    }

    #[test]
    fn config_builder_works() {
        let config = config()
            .with_model("gpt-4-turbo")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "sk-test");
    }

    #[test]
    fn request_asks_for_json_object() {
        let enricher = OpenAIEnricher::new(config()).unwrap();
        let context = PromptContext {
            company_name: "Acme".to_string(),
            industry: "Finance & Insurance".to_string(),
            employee_count: "over 1,000 employees".to_string(),
            revenue: "over $100M revenue".to_string(),
            total_score: 205,
            max_score: 225,
            percentage: 91,
            maturity_level: "AI Leading".to_string(),
            grade: "A".to_string(),
            category_lines: Vec::new(),
            benchmark_average: 150,
            benchmark_insight: "Insight".to_string(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            challenges: String::new(),
            expected_benefits: String::new(),
        };
        let request = enricher.to_openai_request(&context);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn completions_url_joins_base() {
        let enricher = OpenAIEnricher::new(config()).unwrap();
        assert_eq!(
            enricher.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn provider_info_names_model() {
        let enricher = OpenAIEnricher::new(config().with_model("gpt-4o-mini")).unwrap();
        let info = enricher.provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-4o-mini");
    }
}

//! Enrichment provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on enrichment retries.
pub const MAX_ENRICHMENT_RETRIES: u32 = 1;

/// Enrichment provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    /// Which backend enriches the narrative
    #[serde(default)]
    pub provider: EnrichmentProviderKind,

    /// Overall bound on the enrichment call, retry included, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Backend-specific model identifier; provider default when unset
    pub model: Option<String>,

    /// Anthropic API key
    pub anthropic_api_key: Option<Secret<String>>,

    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Retries on a transient provider error
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Pause before the retry, in milliseconds
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

/// Enrichment backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentProviderKind {
    /// Local synthesis only
    #[default]
    None,
    Anthropic,
    OpenAI,
}

impl EnrichmentConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get retry backoff as Duration
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Retries actually performed, capped at one
    pub fn effective_retries(&self) -> u32 {
        self.max_retries.min(MAX_ENRICHMENT_RETRIES)
    }

    /// Check if an enrichment backend is selected
    pub fn is_enabled(&self) -> bool {
        self.provider != EnrichmentProviderKind::None
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate enrichment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            EnrichmentProviderKind::OpenAI if !self.has_openai() => {
                return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
            }
            EnrichmentProviderKind::Anthropic if !self.has_anthropic() => {
                return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
            }
            _ => {}
        }

        if self.timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.max_retries > MAX_ENRICHMENT_RETRIES {
            return Err(ValidationError::TooManyRetries(self.max_retries));
        }

        Ok(())
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            provider: EnrichmentProviderKind::None,
            timeout_ms: default_timeout_ms(),
            model: None,
            anthropic_api_key: None,
            openai_api_key: None,
            base_url: None,
            max_retries: default_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    120_000
}

fn default_retries() -> u32 {
    1
}

fn default_retry_backoff_ms() -> u64 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Option<Secret<String>> {
        Some(Secret::new(value.to_string()))
    }

    #[test]
    fn test_enrichment_config_defaults() {
        let config = EnrichmentConfig::default();
        assert_eq!(config.provider, EnrichmentProviderKind::None);
        assert_eq!(config.timeout_ms, 120_000);
        assert_eq!(config.max_retries, 1);
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_durations() {
        let config = EnrichmentConfig {
            timeout_ms: 1500,
            retry_backoff_ms: 250,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.retry_backoff(), Duration::from_millis(250));
    }

    #[test]
    fn test_has_provider_checks() {
        let config = EnrichmentConfig {
            openai_api_key: secret("sk-xxx"),
            anthropic_api_key: secret(""),
            ..Default::default()
        };
        assert!(config.has_openai());
        assert!(!config.has_anthropic());
    }

    #[test]
    fn test_validation_selected_provider_missing_key() {
        let config = EnrichmentConfig {
            provider: EnrichmentProviderKind::Anthropic,
            openai_api_key: secret("sk-xxx"),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))
        );
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = EnrichmentConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validation_too_many_retries() {
        let config = EnrichmentConfig {
            max_retries: 3,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooManyRetries(3)));
        assert_eq!(config.effective_retries(), 1);
    }

    #[test]
    fn test_validation_valid_config() {
        let config = EnrichmentConfig {
            provider: EnrichmentProviderKind::OpenAI,
            openai_api_key: secret("sk-xxx"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.is_enabled());
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let config = EnrichmentConfig {
            anthropic_api_key: secret("sk-ant-very-secret"),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}

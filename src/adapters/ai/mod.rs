//! Enrichment Provider Adapters.
//!
//! Implementations of the EnrichmentProvider port.
//!
//! ## Available Adapters
//!
//! - `MockEnricher` - Configurable mock for testing
//! - `OpenAIEnricher` - OpenAI chat completions
//! - `AnthropicEnricher` - Anthropic Messages API

mod anthropic_enricher;
mod http;
mod mock_enricher;
mod openai_enricher;

pub use anthropic_enricher::{AnthropicConfig, AnthropicEnricher, DEFAULT_ANTHROPIC_MODEL};
pub use mock_enricher::{MockEnricher, MockResponse, DEFAULT_MOCK_NARRATIVE};
pub use openai_enricher::{OpenAIConfig, OpenAIEnricher, DEFAULT_OPENAI_MODEL};

use std::sync::Arc;

use crate::config::{EnrichmentConfig, EnrichmentProviderKind};
use crate::ports::{EnrichmentError, EnrichmentProvider};

/// Builds the provider selected in configuration.
///
/// Returns `Ok(None)` when no provider is selected. A selected provider
/// without an API key fails with `AuthenticationFailed`.
pub fn build_enrichment_provider(
    config: &EnrichmentConfig,
) -> Result<Option<Arc<dyn EnrichmentProvider>>, EnrichmentError> {
    match config.provider {
        EnrichmentProviderKind::None => Ok(None),
        EnrichmentProviderKind::Anthropic => {
            let key = config
                .anthropic_api_key
                .clone()
                .ok_or(EnrichmentError::AuthenticationFailed)?;
            let mut anthropic = AnthropicConfig::new(key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                anthropic = anthropic.with_model(model.clone());
            }
            if let Some(url) = &config.base_url {
                anthropic = anthropic.with_base_url(url.clone());
            }
            Ok(Some(Arc::new(AnthropicEnricher::new(anthropic)?)))
        }
        EnrichmentProviderKind::OpenAI => {
            let key = config
                .openai_api_key
                .clone()
                .ok_or(EnrichmentError::AuthenticationFailed)?;
            let mut openai = OpenAIConfig::new(key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model.clone());
            }
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url.clone());
            }
            Ok(Some(Arc::new(OpenAIEnricher::new(openai)?)))
        }
    }
}

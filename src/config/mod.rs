//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAPABILITY_DIAGNOSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use capability_diagnosis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Enrichment enabled: {}", config.enrichment.is_enabled());
//! ```

mod enrichment;
mod error;
mod logging;
mod report;
mod scoring;

pub use enrichment::{EnrichmentConfig, EnrichmentProviderKind, MAX_ENRICHMENT_RETRIES};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use report::ReportConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local-only configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Enrichment provider configuration (Anthropic/OpenAI/none)
    #[serde(default)]
    pub enrichment: EnrichmentConfig,

    /// Maturity thresholds and ranking tolerance
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// HTML rendering and benchmark data
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CAPABILITY_DIAGNOSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CAPABILITY_DIAGNOSIS__ENRICHMENT__PROVIDER=anthropic` -> `enrichment.provider`
    /// - `CAPABILITY_DIAGNOSIS__SCORING__MATURITY_THRESHOLDS=100,130,160,190` -> `scoring.maturity_thresholds`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAPABILITY_DIAGNOSIS")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("scoring.maturity_thresholds"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a selected provider without its API key,
    /// a zero timeout, more than one retry, or malformed maturity thresholds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.enrichment.validate()?;
        self.scoring.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Enrichment providers (Anthropic, OpenAI, mock)
//! - `document` - Report renderers (HTML slides)

pub mod ai;
pub mod document;

pub use ai::{build_enrichment_provider, MockEnricher};
pub use document::HtmlSlideRenderer;

//! Ports - Interfaces between the domain and the outside world.
//!
//! - `EnrichmentProvider` - optional generative-model call enriching the narrative
//! - `ReportRenderer` - document emission for a finished report

mod enrichment_provider;
mod report_renderer;

pub use enrichment_provider::{
    EnrichmentError, EnrichmentProvider, EnrichmentResponse, PromptContext, ProviderInfo,
};
pub use report_renderer::ReportRenderer;

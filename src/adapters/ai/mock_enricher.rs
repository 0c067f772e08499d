//! Mock Enricher - Configurable EnrichmentProvider for testing.
//!
//! # Example
//!
//! ```ignore
//! let enricher = MockEnricher::new()
//!     .with_error(EnrichmentError::unavailable("503"))
//!     .with_response(r#"{"executive_summary": "Recovered"}"#);
//!
//! // First call fails with a transient error, second succeeds.
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    EnrichmentError, EnrichmentProvider, EnrichmentResponse, PromptContext, ProviderInfo,
};

/// Answer returned once nothing is queued.
pub const DEFAULT_MOCK_NARRATIVE: &str = r#"{"executive_summary": "Mock enriched summary.", "key_findings": ["Mock finding"], "strategic_recommendations": ["Mock recommendation"]}"#;

/// Mock enrichment provider with queued answers.
///
/// Answers are returned in order; once the queue is empty every call
/// returns [`DEFAULT_MOCK_NARRATIVE`]. Clones share queue and call log.
#[derive(Debug, Clone)]
pub struct MockEnricher {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<PromptContext>>>,
}

/// A queued mock answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(EnrichmentError),
}

impl Default for MockEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnricher {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful answer.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: EnrichmentError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Delays every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    /// Number of calls made, including ones that failed or were cancelled mid-delay.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Contexts passed to each call.
    pub fn get_calls(&self) -> Vec<PromptContext> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success(DEFAULT_MOCK_NARRATIVE.to_string()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl EnrichmentProvider for MockEnricher {
    async fn enrich(&self, context: &PromptContext) -> Result<EnrichmentResponse, EnrichmentError> {
        lock(&self.calls).push(context.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(content) => {
                Ok(EnrichmentResponse::new(content, self.info.model.clone()))
            }
            MockResponse::Error(err) => Err(err),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PromptContext {
        PromptContext {
            company_name: "Acme".to_string(),
            industry: "General Industry".to_string(),
            employee_count: String::new(),
            revenue: String::new(),
            total_score: 100,
            max_score: 225,
            percentage: 44,
            maturity_level: "AI Preparing".to_string(),
            grade: "E".to_string(),
            category_lines: Vec::new(),
            benchmark_average: 125,
            benchmark_insight: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            challenges: String::new(),
            expected_benefits: String::new(),
        }
    }

    #[tokio::test]
    async fn returns_responses_in_order() {
        let enricher = MockEnricher::new().with_response("First").with_response("Second");

        let r1 = enricher.enrich(&context()).await.unwrap();
        let r2 = enricher.enrich(&context()).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r1.model, "mock-model-1");
    }

    #[tokio::test]
    async fn returns_default_after_exhausted() {
        let enricher = MockEnricher::new().with_response("Only one");

        enricher.enrich(&context()).await.unwrap();
        let r2 = enricher.enrich(&context()).await.unwrap();

        assert_eq!(r2.content, DEFAULT_MOCK_NARRATIVE);
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let enricher = MockEnricher::new().with_error(EnrichmentError::rate_limited(30));

        let err = enricher.enrich(&context()).await.unwrap_err();

        assert_eq!(err, EnrichmentError::rate_limited(30));
    }

    #[tokio::test]
    async fn tracks_calls_across_clones() {
        let enricher = MockEnricher::new();
        let clone = enricher.clone();

        clone.enrich(&context()).await.unwrap();

        assert_eq!(enricher.call_count(), 1);
        assert_eq!(enricher.get_calls()[0].company_name, "Acme");
    }

    #[tokio::test]
    async fn delay_is_applied() {
        let enricher = MockEnricher::new().with_delay(Duration::from_millis(20));
        let start = std::time::Instant::now();

        enricher.enrich(&context()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}

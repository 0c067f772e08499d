//! DiagnosisOrchestrator - the single inbound `diagnose` operation.
//!
//! Runs the local pipeline (score, classify, benchmark, synthesize), tries
//! the optional enrichment provider within a bounded time, and assembles
//! the report. Enrichment failure of any kind routes to local synthesis,
//! so `diagnose` always returns a complete report.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::{AppConfig, ValidationError};
use crate::domain::assessment::{CategoryScorer, Submission};
use crate::domain::benchmark::IndustryBenchmarkStore;
use crate::domain::diagnosis::{DiagnosisState, FallbackReason};
use crate::domain::foundation::{DiagnosisId, StateMachine};
use crate::domain::maturity::MaturityClassifier;
use crate::domain::report::{
    AssemblyInput, EnrichedNarrative, NarrativeAssembler, Report, ReportProvenance,
};
use crate::domain::strategy::StrategySynthesizer;
use crate::ports::{
    EnrichmentError, EnrichmentProvider, EnrichmentResponse, PromptContext, ReportRenderer,
};

/// Bounds applied to the enrichment call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentPolicy {
    /// Overall bound, retry included.
    pub timeout: Duration,
    /// Retries on a transient error. At most one is honored.
    pub max_retries: u32,
    /// Pause before a retry.
    pub retry_backoff: Duration,
}

impl Default for EnrichmentPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            max_retries: 1,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

/// Errors building an orchestrator from configuration.
#[derive(Debug, Error)]
pub enum OrchestratorSetupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Enrichment provider could not be built: {0}")]
    Provider(#[from] EnrichmentError),
}

/// Top-level entry point of a diagnosis run.
///
/// Holds no per-run state; one orchestrator serves concurrent runs.
pub struct DiagnosisOrchestrator {
    benchmarks: Arc<IndustryBenchmarkStore>,
    classifier: MaturityClassifier,
    synthesizer: StrategySynthesizer,
    assembler: NarrativeAssembler,
    provider: Option<Arc<dyn EnrichmentProvider>>,
    policy: EnrichmentPolicy,
    renderer: Option<Arc<dyn ReportRenderer>>,
}

impl DiagnosisOrchestrator {
    /// Creates an orchestrator with default scoring and no enrichment.
    pub fn new(benchmarks: Arc<IndustryBenchmarkStore>) -> Self {
        Self {
            benchmarks,
            classifier: MaturityClassifier::default(),
            synthesizer: StrategySynthesizer::default(),
            assembler: NarrativeAssembler::new(),
            provider: None,
            policy: EnrichmentPolicy::default(),
            renderer: None,
        }
    }

    /// Builds an orchestrator from validated configuration.
    ///
    /// The provider and renderer are passed in so the caller decides which
    /// adapters back them.
    pub fn from_config(
        config: &AppConfig,
        benchmarks: Arc<IndustryBenchmarkStore>,
        provider: Option<Arc<dyn EnrichmentProvider>>,
        renderer: Option<Arc<dyn ReportRenderer>>,
    ) -> Result<Self, OrchestratorSetupError> {
        config.validate()?;
        let bands = config.scoring.maturity_bands()?;

        let mut orchestrator = Self::new(benchmarks)
            .with_classifier(MaturityClassifier::new(bands))
            .with_synthesizer(StrategySynthesizer::new(config.scoring.strength_tolerance))
            .with_policy(EnrichmentPolicy {
                timeout: config.enrichment.timeout(),
                max_retries: config.enrichment.effective_retries(),
                retry_backoff: config.enrichment.retry_backoff(),
            });
        if let Some(provider) = provider {
            orchestrator = orchestrator.with_provider(provider);
        }
        if let Some(renderer) = renderer.filter(|_| config.report.render_html) {
            orchestrator = orchestrator.with_renderer(renderer);
        }
        Ok(orchestrator)
    }

    pub fn with_provider(mut self, provider: Arc<dyn EnrichmentProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_policy(mut self, policy: EnrichmentPolicy) -> Self {
        self.policy = EnrichmentPolicy {
            max_retries: policy.max_retries.min(1),
            ..policy
        };
        self
    }

    pub fn with_classifier(mut self, classifier: MaturityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: StrategySynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Attaches an HTML rendering of every report.
    pub fn with_renderer(mut self, renderer: Arc<dyn ReportRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Runs one diagnosis. Never fails.
    pub async fn diagnose(&self, submission: Submission) -> Report {
        let diagnosis_id = DiagnosisId::new();
        let mut state = DiagnosisState::default();

        let defects = submission.defects();
        if !defects.is_clean() {
            debug!(
                diagnosis_id = %diagnosis_id,
                clamped = defects.clamped.len(),
                defaulted = defects.defaulted.len(),
                ignored_keys = defects.ignored_keys.len(),
                "Recovered from input defects"
            );
        }

        let summary = CategoryScorer::score(&submission);
        let maturity = self.classifier.classify(summary.total);
        let benchmark = self.benchmarks.lookup(&submission.company().industry);
        let synthesis = self
            .synthesizer
            .synthesize(&summary, benchmark, submission.challenges());

        let outcome = match &self.provider {
            Some(provider) => {
                advance(diagnosis_id, &mut state, DiagnosisState::AttemptingEnrichment);
                let context = PromptContext::from_results(
                    &submission,
                    &summary,
                    maturity,
                    benchmark,
                    &synthesis,
                );
                match self.enrich(diagnosis_id, provider.as_ref(), &context).await {
                    Ok(enriched) => {
                        advance(diagnosis_id, &mut state, DiagnosisState::EnrichmentSucceeded);
                        Ok(enriched)
                    }
                    Err(reason) => {
                        advance(diagnosis_id, &mut state, DiagnosisState::EnrichmentFailed);
                        Err(reason)
                    }
                }
            }
            None => Err(FallbackReason::NoProviderConfigured),
        };

        let (provenance, narrative) = match outcome {
            Ok((provenance, narrative)) => (provenance, Some(narrative)),
            Err(reason) => {
                if reason.attempted_enrichment() {
                    warn!(
                        diagnosis_id = %diagnosis_id,
                        reason = %reason,
                        "Enrichment failed, falling back to local synthesis"
                    );
                }
                advance(diagnosis_id, &mut state, DiagnosisState::LocalSynthesis);
                (ReportProvenance::local(reason), None)
            }
        };

        let input = AssemblyInput {
            diagnosis_id,
            submission: &submission,
            summary: &summary,
            maturity,
            points_to_next_level: self.classifier.points_to_next_level(summary.total),
            benchmark,
            synthesis: &synthesis,
        };
        let mut report = self.assembler.assemble(&input, provenance);
        if let Some(narrative) = narrative {
            report = report.with_enrichment(&narrative);
        }
        if let Some(renderer) = &self.renderer {
            let html = renderer.render(&report);
            report = report.with_html(html);
        }

        advance(diagnosis_id, &mut state, DiagnosisState::Done);

        info!(
            diagnosis_id = %diagnosis_id,
            total_score = summary.total,
            maturity_level = %maturity,
            provenance = report.provenance().label(),
            "Diagnosis complete"
        );

        report
    }

    /// Calls the provider within the overall time bound and parses the result.
    async fn enrich(
        &self,
        diagnosis_id: DiagnosisId,
        provider: &dyn EnrichmentProvider,
        context: &PromptContext,
    ) -> Result<(ReportProvenance, EnrichedNarrative), FallbackReason> {
        let bound_ms = u64::try_from(self.policy.timeout.as_millis()).unwrap_or(u64::MAX);

        let attempt = self.call_with_retry(diagnosis_id, provider, context);
        let response = match timeout(self.policy.timeout, attempt).await {
            Ok(Ok(response)) => response,
            Ok(Err(EnrichmentError::Timeout { timeout_ms })) => {
                return Err(FallbackReason::Timeout(timeout_ms))
            }
            Ok(Err(err)) => return Err(FallbackReason::ProviderError(err.to_string())),
            Err(_) => return Err(FallbackReason::Timeout(bound_ms)),
        };

        let narrative = EnrichedNarrative::parse(&response.content)
            .map_err(|err| FallbackReason::UnparseablePayload(err.to_string()))?;

        let provenance = ReportProvenance::Enriched {
            provider: provider.provider_info().name,
            model: response.model,
        };
        Ok((provenance, narrative))
    }

    async fn call_with_retry(
        &self,
        diagnosis_id: DiagnosisId,
        provider: &dyn EnrichmentProvider,
        context: &PromptContext,
    ) -> Result<EnrichmentResponse, EnrichmentError> {
        let mut retries = 0;
        loop {
            match provider.enrich(context).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_transient() && retries < self.policy.max_retries => {
                    retries += 1;
                    debug!(
                        diagnosis_id = %diagnosis_id,
                        error = %err,
                        retry = retries,
                        "Transient enrichment error, retrying"
                    );
                    sleep(self.policy.retry_backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn advance(diagnosis_id: DiagnosisId, state: &mut DiagnosisState, next: DiagnosisState) {
    match state.transition_to(next) {
        Ok(next) => {
            debug!(diagnosis_id = %diagnosis_id, from = %state, to = %next, "State transition");
            *state = next;
        }
        Err(err) => {
            warn!(diagnosis_id = %diagnosis_id, error = %err, "Rejected state transition");
        }
    }
}

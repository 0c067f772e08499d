//! capability-diagnosis: run one AI capability diagnosis from a JSON submission.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use capability_diagnosis::adapters::{build_enrichment_provider, HtmlSlideRenderer};
use capability_diagnosis::application::DiagnosisOrchestrator;
use capability_diagnosis::config::{AppConfig, LogFormat, LoggingConfig};
use capability_diagnosis::domain::assessment::{RawSubmission, Submission};
use capability_diagnosis::domain::benchmark::IndustryBenchmarkStore;
use capability_diagnosis::ports::ReportRenderer;

#[derive(Parser)]
#[command(name = "capability-diagnosis")]
#[command(version, about = "Diagnose AI capability maturity from a self-assessment", long_about = None)]
struct Cli {
    /// Submission JSON document
    submission: PathBuf,

    /// Print the paginated HTML document instead of the report JSON
    #[arg(long)]
    html: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging);
    config.validate().context("invalid configuration")?;

    let benchmarks = match &config.report.benchmarks_path {
        Some(path) => IndustryBenchmarkStore::from_yaml_file(path)
            .with_context(|| format!("failed to load benchmarks from {}", path.display()))?,
        None => IndustryBenchmarkStore::builtin(),
    };

    let provider = build_enrichment_provider(&config.enrichment)
        .context("failed to build enrichment provider")?;
    // `report.render_html` decides whether JSON output carries the document.
    let renderer: Option<Arc<dyn ReportRenderer>> = Some(Arc::new(HtmlSlideRenderer::new()));
    let orchestrator =
        DiagnosisOrchestrator::from_config(&config, Arc::new(benchmarks), provider, renderer)?;

    let payload = std::fs::read_to_string(&cli.submission)
        .with_context(|| format!("failed to read {}", cli.submission.display()))?;
    let raw: RawSubmission =
        serde_json::from_str(&payload).context("submission is not a valid JSON document")?;

    let report = orchestrator.diagnose(Submission::from_raw(raw)).await;

    let rendered = if cli.html {
        match report.html() {
            Some(html) => html.to_string(),
            None => HtmlSlideRenderer::new().render(&report),
        }
    } else {
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

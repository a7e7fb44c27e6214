//! Portfolio Store binary - loads all content once and prints a status summary.
//!
//! Configuration comes from `PORTFOLIO__*` environment variables (see
//! [`portfolio_store::config`]). Exits non-zero when any section is still
//! failing after one retry round.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;

use portfolio_store::adapters::{HttpSource, HttpSourceConfig, JsonFileSource, TracingObserver};
use portfolio_store::application::{
    GetContentOverviewHandler, GetContentOverviewQuery, PortfolioStore,
    RetryFailedSectionsCommand, RetryFailedSectionsHandler,
};
use portfolio_store::config::{AppConfig, ConfigError, SourceConfig, SourceKind};
use portfolio_store::domain::content::Topic;
use portfolio_store::ports::{SectionSource, SectionSources, SourceError};
use portfolio_store::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Failed to create content source: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to render summary: {0}")]
    Render(#[from] serde_json::Error),
}

fn build_source(config: &SourceConfig) -> Result<Arc<dyn SectionSource>, SourceError> {
    match config.kind {
        SourceKind::File => Ok(Arc::new(JsonFileSource::new(config.data_dir.clone()))),
        SourceKind::Http => {
            // validate() guarantees the URL is present for HTTP sources
            let base_url = config.base_url.clone().unwrap_or_default();
            let http = HttpSourceConfig::new(base_url).with_timeout(config.timeout());
            Ok(Arc::new(HttpSource::new(http)?))
        }
    }
}

async fn run() -> Result<bool, StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init(&config.logging)?;

    let source = build_source(&config.source)?;
    tracing::info!(source = source.name(), "Starting portfolio content load");

    let store = PortfolioStore::new(SectionSources::new(source));
    let _log_subscription = store.subscribe(Topic::Status, Arc::new(TracingObserver));

    let overview_handler = GetContentOverviewHandler::new(store.clone());
    let mut overview = overview_handler
        .handle(GetContentOverviewQuery {
            ensure_loaded: true,
            force_refresh: false,
        })
        .await;

    if overview.any_error {
        let retried = RetryFailedSectionsHandler::new(store.clone())
            .handle(RetryFailedSectionsCommand)
            .await;
        tracing::info!(
            recovered = retried.recovered.len(),
            still_failing = retried.still_failing.len(),
            "Retry round finished"
        );
        overview = overview_handler.handle(GetContentOverviewQuery::default()).await;
    }

    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(!overview.any_error)
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("portfolio-store: {}", err);
            ExitCode::FAILURE
        }
    }
}

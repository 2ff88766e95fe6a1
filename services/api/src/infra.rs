use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use candidate_engine::config::EngineConfig;
use candidate_engine::evaluation::Evaluator;
use candidate_engine::resources::EngineResources;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared evaluator once; the taxonomy and embedding provider are
/// immutable for the rest of the process's life.
pub(crate) fn bootstrap_evaluator(config: &EngineConfig) -> Arc<Evaluator> {
    let resources = EngineResources::bootstrap(config.embedding_dimensions);
    Arc::new(Evaluator::new(Arc::new(resources)))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

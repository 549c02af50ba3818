use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryQuestionSetStore, StageLogTrigger};
use crate::routes::with_pipeline_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::telemetry;
use hireflow::workflows::sourcing::{
    HttpQuestionGenerator, HttpWebhookChannel, ProgressMonitor, QuestionFactory, SourcingNotifier,
};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let channel = HttpWebhookChannel::new()?;
    let notifier = Arc::new(SourcingNotifier::new(config.notifier.clone(), channel));

    let generator = Arc::new(HttpQuestionGenerator::new(config.questions.clone())?);
    let store = Arc::new(InMemoryQuestionSetStore::default());
    let factory = Arc::new(QuestionFactory::new(generator, store));

    let monitor = Arc::new(ProgressMonitor::new(Arc::new(StageLogTrigger)));

    let app = with_pipeline_routes(notifier, factory, monitor)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "sourcing pipeline orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

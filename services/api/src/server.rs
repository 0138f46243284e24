use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository, SnapshotBackend};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use trampos::config::AppConfig;
use trampos::error::AppError;
use trampos::quiz::QuizService;
use trampos::telemetry;

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

    let snapshots = SnapshotBackend::from_data_dir(config.quiz.data_dir.clone());
    info!(snapshots = %snapshots.describe(), "admin snapshot storage selected");

    let repository = Arc::new(InMemorySessionRepository::with_capacity(
        config.quiz.max_sessions,
    ));
    let quiz_service = Arc::new(QuizService::new(
        repository,
        Arc::new(snapshots),
        config.quiz.settings,
    )?);

    let app = with_quiz_routes(quiz_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "trampos quiz engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_outreach_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use outreach_engine::config::AppConfig;
use outreach_engine::error::AppError;
use outreach_engine::telemetry;
use outreach_engine::workflows::outreach::OutreachAdvisor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let advisor = Arc::new(OutreachAdvisor::new(config.policy));

    let app = with_outreach_routes(advisor)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        duplicate_interval_days = config.policy.duplicate_interval_days,
        freelance_limit_days = config.policy.freelance_limit_days,
        "outreach advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

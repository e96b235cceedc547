use crate::cli::ServeArgs;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prompt_coach::api::{with_prompt_routes, AppState};
use prompt_coach::challenges::ChallengeService;
use prompt_coach::config::AppConfig;
use prompt_coach::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let catalog = Arc::new(config.prompts.catalog()?);
    let catalog_source = config
        .prompts
        .catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        challenges = catalog.len(),
        source = %catalog_source,
        "challenge catalog loaded"
    );

    let limits = config.prompts.limits();
    let service = Arc::new(ChallengeService::new(catalog, limits));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_prompt_routes(service, limits)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, max_prompt_chars = limits.max_chars(), "prompt coach ready");

    axum::serve(listener, app).await?;
    Ok(())
}

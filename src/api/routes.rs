use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::challenges::{challenge_router, ChallengeService};
use crate::error::AppError;
use crate::evaluation::{EvaluationResult, PromptEvaluator};
use crate::validation::PromptLimits;

/// Process-wide readiness and metrics handles shared with operational endpoints.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Full application router minus the outer metrics/state layers.
pub fn with_prompt_routes(service: Arc<ChallengeService>, limits: PromptLimits) -> Router {
    let evaluation = Router::new()
        .route("/api/v1/evaluate", post(evaluate_handler))
        .with_state(limits);

    challenge_router(service)
        .merge(evaluation)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub async fn evaluate_handler(
    State(limits): State<PromptLimits>,
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    let prompt = limits.validate(&payload.prompt)?;

    let result = PromptEvaluator::new().evaluate(prompt);
    debug!(
        prompt_chars = prompt.chars().count(),
        overall_score = result.overall_score,
        "evaluated prompt"
    );

    Ok(Json(result))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

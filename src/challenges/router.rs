use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeId, ChallengeSummary,
};
use super::service::{AttemptRequest, ChallengeService};
use crate::error::AppError;
use crate::validation::RequestError;

/// Optional listing filter.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    pub(crate) difficulty: Option<String>,
}

/// Graded attempt stamped with the time it was received.
#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    #[serde(flatten)]
    pub attempt: ChallengeAttempt,
    pub timestamp: DateTime<Utc>,
}

/// Router builder exposing challenge listing and grading endpoints.
pub fn challenge_router(service: Arc<ChallengeService>) -> Router {
    Router::new()
        .route("/api/v1/challenges", get(list_handler))
        .route("/api/v1/challenges/attempts", post(attempt_handler))
        .route("/api/v1/challenges/:challenge_id", get(detail_handler))
        .with_state(service)
}

pub(crate) async fn list_handler(
    State(service): State<Arc<ChallengeService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ChallengeSummary>>, AppError> {
    let difficulty = query
        .difficulty
        .map(|raw| ChallengeDifficulty::parse(&raw).ok_or(RequestError::UnknownDifficulty(raw)))
        .transpose()?;

    Ok(Json(service.list(difficulty)))
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<ChallengeService>>,
    Path(challenge_id): Path<String>,
) -> Result<Json<Challenge>, AppError> {
    let challenge = service.get(&ChallengeId(challenge_id))?;
    Ok(Json(challenge.clone()))
}

pub(crate) async fn attempt_handler(
    State(service): State<Arc<ChallengeService>>,
    Json(request): Json<AttemptRequest>,
) -> Result<Json<AttemptResponse>, AppError> {
    let attempt = service.attempt(request)?;
    Ok(Json(AttemptResponse {
        attempt,
        timestamp: Utc::now(),
    }))
}

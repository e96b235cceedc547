use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use super::catalog::ChallengeCatalog;
use super::domain::{
    Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeId, ChallengeSummary,
};
use super::grader::grade_attempt;
use crate::validation::{PromptLimits, RequestError};

/// Submission payload for grading a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRequest {
    #[serde(default)]
    pub challenge_id: String,
    #[serde(default)]
    pub user_prompt: String,
}

/// Service pairing the read-only catalog with request validation and grading.
pub struct ChallengeService {
    catalog: Arc<ChallengeCatalog>,
    limits: PromptLimits,
}

impl ChallengeService {
    pub fn new(catalog: Arc<ChallengeCatalog>, limits: PromptLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn catalog(&self) -> &ChallengeCatalog {
        &self.catalog
    }

    pub fn list(&self, difficulty: Option<ChallengeDifficulty>) -> Vec<ChallengeSummary> {
        self.catalog
            .iter()
            .filter(|challenge| difficulty.map_or(true, |wanted| challenge.difficulty == wanted))
            .map(Challenge::summary)
            .collect()
    }

    pub fn get(&self, id: &ChallengeId) -> Result<&Challenge, ChallengeServiceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| ChallengeServiceError::NotFound(id.clone()))
    }

    /// Validate the submission, look up its challenge, and grade the rewrite.
    pub fn attempt(
        &self,
        request: AttemptRequest,
    ) -> Result<ChallengeAttempt, ChallengeServiceError> {
        if request.challenge_id.is_empty() {
            return Err(RequestError::MissingChallengeId.into());
        }
        let prompt = self.limits.validate(&request.user_prompt)?;

        let challenge = self.get(&ChallengeId(request.challenge_id.clone()))?;
        let attempt = grade_attempt(challenge, prompt);

        debug!(
            challenge_id = %attempt.challenge_id,
            score = attempt.score,
            passed = attempt.passed,
            "graded challenge attempt"
        );

        Ok(attempt)
    }
}

/// Error raised by the challenge service.
#[derive(Debug, thiserror::Error)]
pub enum ChallengeServiceError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("challenge {0} not found")]
    NotFound(ChallengeId),
}

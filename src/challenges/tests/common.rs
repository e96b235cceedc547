use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::challenges::domain::{
    Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeId, ChallengeType,
};
use crate::challenges::{ChallengeCatalog, ChallengeService};
use crate::validation::PromptLimits;

pub(super) fn challenge(kind: ChallengeType, criteria: &[&str]) -> Challenge {
    Challenge {
        id: ChallengeId::from("custom-1"),
        title: "Custom".to_string(),
        difficulty: ChallengeDifficulty::Intermediate,
        kind,
        description: String::new(),
        scenario: String::new(),
        broken_prompt: None,
        target_output: String::new(),
        hints: Vec::new(),
        success_criteria: criteria.iter().map(|criterion| criterion.to_string()).collect(),
        points: 20,
    }
}

pub(super) fn json_challenge() -> Challenge {
    challenge(
        ChallengeType::EnforceJson,
        &[
            "Requests JSON format explicitly",
            "Defines schema with field names",
            "Specifies data types",
        ],
    )
}

pub(super) fn attempt(id: &str, passed: bool) -> ChallengeAttempt {
    ChallengeAttempt {
        challenge_id: ChallengeId::from(id),
        user_prompt_text: "prompt".to_string(),
        passed,
        score: if passed { 100 } else { 0 },
        feedback: Vec::new(),
    }
}

pub(super) fn standard_service() -> Arc<ChallengeService> {
    Arc::new(ChallengeService::new(
        Arc::new(ChallengeCatalog::standard()),
        PromptLimits::default(),
    ))
}

pub(super) async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

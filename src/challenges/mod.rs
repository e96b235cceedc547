//! Prompt-engineering challenges: the read-only catalog, criterion heuristics, and grading.

pub mod catalog;
pub mod domain;
mod grader;
pub mod matcher;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ChallengeCatalog};
pub use domain::{
    Challenge, ChallengeAttempt, ChallengeDifficulty, ChallengeId, ChallengeProgress,
    ChallengeSummary, ChallengeType,
};
pub use grader::{
    attempt_score, check_criteria, grade_attempt, CriterionResult, PASSING_SCORE,
};
pub use matcher::{criterion_satisfied, CriterionRule, PromptCheck};
pub use router::{challenge_router, AttemptResponse};
pub use service::{AttemptRequest, ChallengeService, ChallengeServiceError};

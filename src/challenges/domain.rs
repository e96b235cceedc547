use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for catalog challenges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(pub String);

impl ChallengeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChallengeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ChallengeDifficulty {
    pub const fn ordered() -> [Self; 3] {
        [Self::Beginner, Self::Intermediate, Self::Advanced]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|difficulty| difficulty.label().eq_ignore_ascii_case(value.trim()))
    }
}

/// The prompt-engineering skill a challenge exercises; selects the criterion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeType {
    FixPrompt,
    ReduceHallucination,
    EnforceJson,
    AddConstraints,
    ExtractData,
    ImproveClarity,
}

impl ChallengeType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FixPrompt,
            Self::ReduceHallucination,
            Self::EnforceJson,
            Self::AddConstraints,
            Self::ExtractData,
            Self::ImproveClarity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FixPrompt => "fix-prompt",
            Self::ReduceHallucination => "reduce-hallucination",
            Self::EnforceJson => "enforce-json",
            Self::AddConstraints => "add-constraints",
            Self::ExtractData => "extract-data",
            Self::ImproveClarity => "improve-clarity",
        }
    }
}

/// Catalog entry describing an exercise and how rewrites of its broken prompt are graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: ChallengeId,
    pub title: String,
    pub difficulty: ChallengeDifficulty,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken_prompt: Option<String>,
    #[serde(default)]
    pub target_output: String,
    #[serde(default)]
    pub hints: Vec<String>,
    pub success_criteria: Vec<String>,
    pub points: u32,
}

/// Condensed listing view that omits hints and grading criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSummary {
    pub id: ChallengeId,
    pub title: String,
    pub difficulty: ChallengeDifficulty,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub description: String,
    pub points: u32,
}

impl Challenge {
    pub fn summary(&self) -> ChallengeSummary {
        ChallengeSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            difficulty: self.difficulty,
            kind: self.kind,
            description: self.description.clone(),
            points: self.points,
        }
    }
}

/// Graded outcome of one submitted rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeAttempt {
    pub challenge_id: ChallengeId,
    pub user_prompt_text: String,
    pub passed: bool,
    pub score: u8,
    pub feedback: Vec<String>,
}

/// Aggregate progress across a catalog for a set of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    pub total_challenges: usize,
    pub completed_challenges: usize,
    pub total_points: u32,
    pub earned_points: u32,
}

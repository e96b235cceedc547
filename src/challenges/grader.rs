use super::domain::{Challenge, ChallengeAttempt};
use super::matcher::criterion_satisfied;

/// Minimum percentage of satisfied criteria for an attempt to pass.
pub const PASSING_SCORE: u8 = 70;

/// Per-criterion verdict, kept in the challenge's criterion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionResult {
    pub criterion: String,
    pub satisfied: bool,
}

impl CriterionResult {
    pub fn feedback_line(&self) -> String {
        let marker = if self.satisfied { '✓' } else { '✗' };
        format!("{marker} {}", self.criterion)
    }
}

/// Check every success criterion of `challenge` against `prompt`.
pub fn check_criteria(challenge: &Challenge, prompt: &str) -> Vec<CriterionResult> {
    let baseline = challenge.broken_prompt.as_deref();
    challenge
        .success_criteria
        .iter()
        .map(|criterion| CriterionResult {
            criterion: criterion.clone(),
            satisfied: criterion_satisfied(challenge.kind, criterion, prompt, baseline),
        })
        .collect()
}

/// Percentage of satisfied criteria, rounded half up. A challenge without criteria scores 100.
pub fn attempt_score(satisfied: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let satisfied = satisfied.min(total);
    ((satisfied * 200 + total) / (total * 2)) as u8
}

pub fn summary_line(passed: bool, score: u8) -> String {
    if passed {
        "🎉 Challenge completed!".to_string()
    } else {
        format!("⚠️ Score: {score}%. Keep trying! (Need {PASSING_SCORE}% to pass)")
    }
}

/// Grade a submitted rewrite against the challenge's success criteria.
pub fn grade_attempt(challenge: &Challenge, prompt: &str) -> ChallengeAttempt {
    let results = check_criteria(challenge, prompt);
    let satisfied = results.iter().filter(|result| result.satisfied).count();

    let score = attempt_score(satisfied, results.len());
    let passed = score >= PASSING_SCORE;

    let mut feedback = Vec::with_capacity(results.len() + 1);
    feedback.push(summary_line(passed, score));
    feedback.extend(results.iter().map(CriterionResult::feedback_line));

    ChallengeAttempt {
        challenge_id: challenge.id.clone(),
        user_prompt_text: prompt.to_string(),
        passed,
        score,
        feedback,
    }
}

//! Heuristic prompt quality scoring.
//!
//! A prompt is reduced to lexical [`TextFeatures`], scored along three dimensions, checked for
//! example and constraint phrasing, and folded into a single [`EvaluationResult`]. Every step is a
//! pure function of the input text, so results are deterministic for any string, including the
//! empty one.

mod detectors;
mod features;
mod rules;
mod suggestions;

pub use detectors::{has_constraints, has_examples};
pub use features::TextFeatures;
pub use suggestions::{Suggestion, SUGGESTION_THRESHOLD};

use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the fixed scoring rubric to prompt text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEvaluator;

impl PromptEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, prompt: &str) -> EvaluationResult {
        let features = TextFeatures::extract(prompt);
        let scores = rules::score_dimensions(&features);
        let has_examples = has_examples(prompt);
        let has_constraints = has_constraints(prompt);

        let suggestions = suggestions::suggest(&scores, has_examples, has_constraints);
        let overall_score = overall_score(
            [scores.clarity, scores.specificity, scores.structure],
            has_examples,
            has_constraints,
        );

        EvaluationResult {
            clarity: scores.clarity,
            specificity: scores.specificity,
            structure: scores.structure,
            has_examples,
            has_constraints,
            overall_score,
            suggestions,
        }
    }
}

/// Shorthand for [`PromptEvaluator::evaluate`].
pub fn evaluate_prompt(prompt: &str) -> EvaluationResult {
    PromptEvaluator.evaluate(prompt)
}

/// Mean of the three dimensions and the two detectors, each detector weighted as 0 or 100.
fn overall_score(dimensions: [u8; 3], has_examples: bool, has_constraints: bool) -> u8 {
    let detector_points = |present: bool| if present { 100 } else { 0 };
    let total: u32 = dimensions.iter().map(|score| u32::from(*score)).sum::<u32>()
        + detector_points(has_examples)
        + detector_points(has_constraints);

    (f64::from(total) / 5.0).round() as u8
}

/// Quality scorecard for a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub clarity: u8,
    pub specificity: u8,
    pub structure: u8,
    pub has_examples: bool,
    pub has_constraints: bool,
    pub overall_score: u8,
    pub suggestions: Vec<String>,
}

use super::rules::DimensionScores;

/// Dimension scores below this value produce an improvement suggestion.
pub const SUGGESTION_THRESHOLD: u8 = 70;

/// Improvement hints, declared in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Clarity,
    Specificity,
    Structure,
    Examples,
    Constraints,
}

impl Suggestion {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Clarity,
            Self::Specificity,
            Self::Structure,
            Self::Examples,
            Self::Constraints,
        ]
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Clarity => "Make your instructions more explicit and clear",
            Self::Specificity => "Add more specific details about what you want",
            Self::Structure => {
                "Organize your prompt with clear sections (context, task, constraints)"
            }
            Self::Examples => "Include examples to guide the AI",
            Self::Constraints => "Define constraints or requirements for the output",
        }
    }

    fn applies(self, scores: &DimensionScores, has_examples: bool, has_constraints: bool) -> bool {
        match self {
            Self::Clarity => scores.clarity < SUGGESTION_THRESHOLD,
            Self::Specificity => scores.specificity < SUGGESTION_THRESHOLD,
            Self::Structure => scores.structure < SUGGESTION_THRESHOLD,
            Self::Examples => !has_examples,
            Self::Constraints => !has_constraints,
        }
    }
}

pub(crate) fn suggest(
    scores: &DimensionScores,
    has_examples: bool,
    has_constraints: bool,
) -> Vec<String> {
    Suggestion::ordered()
        .into_iter()
        .filter(|suggestion| suggestion.applies(scores, has_examples, has_constraints))
        .map(|suggestion| suggestion.message().to_string())
        .collect()
}

//! Keyword heuristics deciding whether a rewritten prompt satisfies one success criterion.
//!
//! Each [`ChallengeType`] owns an ordered table of [`CriterionRule`]s. A rule is triggered when
//! the criterion text mentions one of its trigger words; the first triggered rule decides the
//! outcome. Criteria no typed rule recognises go through [`GENERIC_RULES`] and finally the
//! content-word overlap fallback. All comparisons run on lower-cased text.

use super::domain::ChallengeType;

/// Criterion words shorter than or equal to this many characters are ignored by the fallback.
const FALLBACK_MIN_WORD_CHARS: usize = 3;

/// Presence check run against the lower-cased submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCheck {
    /// Any listed phrase appears in the prompt.
    Mentions(&'static [&'static str]),
    /// Any listed phrase appears, or the prompt contains a digit.
    MentionsOrNumber(&'static [&'static str]),
    /// The prompt is more than `margin` characters longer than the challenge's broken prompt.
    LongerThanBaseline { margin: usize },
}

impl PromptCheck {
    fn holds(&self, prompt: &str, lowered_prompt: &str, baseline: Option<&str>) -> bool {
        match self {
            PromptCheck::Mentions(phrases) => mentions_any(lowered_prompt, phrases),
            PromptCheck::MentionsOrNumber(phrases) => {
                mentions_any(lowered_prompt, phrases)
                    || lowered_prompt.chars().any(|c| c.is_ascii_digit())
            }
            PromptCheck::LongerThanBaseline { margin } => {
                let baseline_len = baseline.map(|text| text.chars().count()).unwrap_or(0);
                prompt.chars().count() > baseline_len + margin
            }
        }
    }
}

/// Maps criterion vocabulary to the check it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionRule {
    pub triggers: &'static [&'static str],
    pub check: PromptCheck,
}

impl CriterionRule {
    fn is_triggered_by(&self, lowered_criterion: &str) -> bool {
        mentions_any(lowered_criterion, self.triggers)
    }
}

const ENFORCE_JSON_RULES: &[CriterionRule] = &[
    CriterionRule {
        triggers: &["json format"],
        check: PromptCheck::Mentions(&["json"]),
    },
    CriterionRule {
        triggers: &["schema", "field"],
        check: PromptCheck::Mentions(&["schema", "structure", "field", "properties"]),
    },
    CriterionRule {
        triggers: &["data type"],
        check: PromptCheck::Mentions(&["string", "number", "boolean", "array", "object", "type"]),
    },
];

const REDUCE_HALLUCINATION_RULES: &[CriterionRule] = &[
    CriterionRule {
        triggers: &["uncertain"],
        check: PromptCheck::Mentions(&[
            "uncertain",
            "unsure",
            "\"don't know\"",
            "don't make up",
            "admit",
        ]),
    },
    CriterionRule {
        triggers: &["source", "cite"],
        check: PromptCheck::Mentions(&["source", "citation", "cite", "reference", "verify"]),
    },
    CriterionRule {
        triggers: &["accuracy"],
        check: PromptCheck::Mentions(&["accurate", "verified", "factual", "correct"]),
    },
];

const ADD_CONSTRAINTS_RULES: &[CriterionRule] = &[
    CriterionRule {
        triggers: &["length"],
        check: PromptCheck::MentionsOrNumber(&[
            "word",
            "sentence",
            "paragraph",
            "character",
            "line",
            "brief",
            "concise",
        ]),
    },
    CriterionRule {
        triggers: &["format"],
        check: PromptCheck::Mentions(&["format", "bullet", "list", "paragraph", "section"]),
    },
    CriterionRule {
        triggers: &["audience"],
        check: PromptCheck::Mentions(&[
            "beginner", "expert", "child", "student", "audience", "level",
        ]),
    },
];

const CLARITY_RULES: &[CriterionRule] = &[
    CriterionRule {
        triggers: &["specific"],
        check: PromptCheck::LongerThanBaseline { margin: 10 },
    },
    CriterionRule {
        triggers: &["context"],
        check: PromptCheck::Mentions(&["for", "because", "in order to", "context", "scenario"]),
    },
    CriterionRule {
        triggers: &["example"],
        check: PromptCheck::Mentions(&["example", "instance", "such as", "for example", "e.g."]),
    },
    CriterionRule {
        triggers: &["step"],
        check: PromptCheck::Mentions(&["step", "1.", "2.", "first", "second", "then", "next"]),
    },
];

const EXTRACT_DATA_RULES: &[CriterionRule] = &[
    CriterionRule {
        triggers: &["extract"],
        check: PromptCheck::Mentions(&["extract", "pull", "get", "find"]),
    },
    CriterionRule {
        triggers: &["fields"],
        check: PromptCheck::Mentions(&["name", "date", "email", "phone", "address", "field"]),
    },
    CriterionRule {
        triggers: &["example"],
        check: PromptCheck::Mentions(&["example", "like", "such as"]),
    },
];

/// Rules consulted for every challenge type once the typed table has no match.
pub const GENERIC_RULES: &[CriterionRule] = &[CriterionRule {
    triggers: &["output"],
    check: PromptCheck::Mentions(&["output", "result", "response", "answer"]),
}];

impl ChallengeType {
    /// Ordered rule table for this challenge type.
    pub const fn criterion_rules(self) -> &'static [CriterionRule] {
        match self {
            ChallengeType::EnforceJson => ENFORCE_JSON_RULES,
            ChallengeType::ReduceHallucination => REDUCE_HALLUCINATION_RULES,
            ChallengeType::AddConstraints => ADD_CONSTRAINTS_RULES,
            ChallengeType::ImproveClarity | ChallengeType::FixPrompt => CLARITY_RULES,
            ChallengeType::ExtractData => EXTRACT_DATA_RULES,
        }
    }
}

/// Decide whether `prompt` satisfies `criterion` for a challenge of type `kind`.
///
/// `baseline` is the challenge's broken prompt; when absent it counts as zero characters.
pub fn criterion_satisfied(
    kind: ChallengeType,
    criterion: &str,
    prompt: &str,
    baseline: Option<&str>,
) -> bool {
    let lowered_criterion = criterion.to_lowercase();
    let lowered_prompt = prompt.to_lowercase();

    let rule = kind
        .criterion_rules()
        .iter()
        .chain(GENERIC_RULES)
        .find(|rule| rule.is_triggered_by(&lowered_criterion));

    match rule {
        Some(rule) => rule.check.holds(prompt, &lowered_prompt, baseline),
        None => shares_content_word(&lowered_criterion, &lowered_prompt),
    }
}

/// Fallback: any criterion word longer than three characters appears verbatim in the prompt.
fn shares_content_word(lowered_criterion: &str, lowered_prompt: &str) -> bool {
    lowered_criterion
        .split(' ')
        .filter(|word| word.chars().count() > FALLBACK_MIN_WORD_CHARS)
        .any(|word| lowered_prompt.contains(word))
}

fn mentions_any(haystack: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| haystack.contains(phrase))
}

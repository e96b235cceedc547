use regex::Regex;
use std::sync::LazyLock;

static QUESTION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(&["what", "how", "why", "when", "where", "which", "who"]));

static ACTION_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(&[
        "create",
        "generate",
        "write",
        "explain",
        "analyze",
        "summarize",
        "list",
    ])
});

static FORMATTING_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(&["format", "json", "markdown", "bullet", "list", "table"])
});

static SECTION_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(&["context:", "task:", "example:", "constraint:", "format:"])
});

static SPECIFICITY_ADJECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    keyword_pattern(&["specific", "particular", "exact", "precise", "detailed"])
});

static TERMINAL_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| literal(r"[.!?]"));

static DIGIT: LazyLock<Regex> = LazyLock::new(|| literal(r"[0-9]"));

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| literal(r"[•\-*]|[0-9]+\."));

/// Case-insensitive alternation over plain keywords; matches anywhere in the text.
fn keyword_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    literal(&format!("(?i){alternation}"))
}

fn literal(pattern: &str) -> Regex {
    // Patterns are compile-time constants built from escaped keywords.
    Regex::new(pattern).expect("feature pattern compiles")
}

/// Lexical signals derived from a raw prompt.
///
/// Every flag is a substring-level presence check, so `"somewhat"` still carries the question
/// word `what`. Empty input yields all flags unset and zero counts (apart from `word_count`,
/// which counts space-separated segments and is therefore 1 for the empty string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFeatures {
    pub has_question_word: bool,
    pub has_action_verb: bool,
    pub has_terminal_punctuation: bool,
    pub has_digit: bool,
    pub has_formatting_keyword: bool,
    pub has_section_label: bool,
    pub line_breaks: usize,
    pub has_list_marker: bool,
    pub has_specificity_adjective: bool,
    pub char_len: usize,
    pub word_count: usize,
}

impl TextFeatures {
    pub fn extract(prompt: &str) -> Self {
        Self {
            has_question_word: QUESTION_WORDS.is_match(prompt),
            has_action_verb: ACTION_VERBS.is_match(prompt),
            has_terminal_punctuation: TERMINAL_PUNCTUATION.is_match(prompt),
            has_digit: DIGIT.is_match(prompt),
            has_formatting_keyword: FORMATTING_KEYWORDS.is_match(prompt),
            has_section_label: SECTION_LABELS.is_match(prompt),
            line_breaks: prompt.matches('\n').count(),
            has_list_marker: LIST_MARKER.is_match(prompt),
            has_specificity_adjective: SPECIFICITY_ADJECTIVES.is_match(prompt),
            char_len: prompt.chars().count(),
            word_count: prompt.split(' ').count(),
        }
    }
}

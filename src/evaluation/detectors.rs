const EXAMPLE_PHRASES: &[&str] = &["example", "for instance", "such as", "like this", "e.g."];

const CONSTRAINT_PHRASES: &[&str] = &[
    "must",
    "should",
    "require",
    "limit",
    "maximum",
    "minimum",
    "constraint",
    "don't",
    "avoid",
];

/// True when the prompt carries an example-indicating phrase.
pub fn has_examples(prompt: &str) -> bool {
    contains_any(prompt, EXAMPLE_PHRASES)
}

/// True when the prompt carries a constraint-indicating phrase.
pub fn has_constraints(prompt: &str) -> bool {
    contains_any(prompt, CONSTRAINT_PHRASES)
}

fn contains_any(prompt: &str, phrases: &[&str]) -> bool {
    let lowered = prompt.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase))
}

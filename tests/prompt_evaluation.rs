use prompt_coach::evaluation::{evaluate_prompt, PromptEvaluator, Suggestion};

fn sample_prompts() -> Vec<String> {
    vec![
        String::new(),
        "What is 2+2?".to_string(),
        "Ünïcödé prömpt with àccents, still fine?".to_string(),
        "a".repeat(20_000),
        "Context: x\nTask: write a json table with 5 rows.\n- specific\n1. must".to_string(),
        "\n\n\n\n".to_string(),
        "Why how what when where which who? Create generate write explain analyze! \
         Return a specific, precise, detailed markdown table with 12 exact rows."
            .to_string(),
    ]
}

#[test]
fn dimensions_stay_within_percentage_bounds() {
    for prompt in sample_prompts() {
        let result = evaluate_prompt(&prompt);
        for score in [
            result.clarity,
            result.specificity,
            result.structure,
            result.overall_score,
        ] {
            assert!(score <= 100, "score {score} out of range for {prompt:?}");
        }
    }
}

#[test]
fn empty_prompt_gets_every_suggestion() {
    let result = evaluate_prompt("");

    assert_eq!(
        (result.clarity, result.specificity, result.structure),
        (30, 40, 50)
    );
    assert_eq!(result.overall_score, 24);
    let expected: Vec<String> = Suggestion::ordered()
        .iter()
        .map(|suggestion| suggestion.message().to_string())
        .collect();
    assert_eq!(result.suggestions, expected);
}

#[test]
fn short_question_is_penalised_for_length() {
    let result = evaluate_prompt("What is 2+2?");

    assert!(!result.has_examples);
    assert!(result.specificity >= 55, "digit counts toward specificity");
    // question word and punctuation add 25, the under-20-character penalty takes 20
    assert_eq!(result.clarity, 55);
}

#[test]
fn example_and_constraint_phrases_always_detected() {
    let surroundings = ["", "Tell me about cats. ", "x\n\n- ", "ALL CAPS PREFIX "];

    for prefix in surroundings {
        let with_example = evaluate_prompt(&format!("{prefix}for example"));
        assert!(with_example.has_examples, "prefix {prefix:?}");

        let with_constraint = evaluate_prompt(&format!("{prefix}you must"));
        assert!(with_constraint.has_constraints, "prefix {prefix:?}");
    }
}

#[test]
fn evaluation_is_deterministic() {
    let evaluator = PromptEvaluator::new();
    for prompt in sample_prompts() {
        assert_eq!(evaluator.evaluate(&prompt), evaluator.evaluate(&prompt));
    }
}

#[test]
fn well_structured_prompt_needs_only_missing_feedback() {
    let prompt = "Context: x\nTask: write a json table with 5 rows.\n- specific\n1. must";
    let result = evaluate_prompt(prompt);

    assert_eq!(result.clarity, 75);
    assert_eq!(result.specificity, 100);
    assert_eq!(result.structure, 100);
    assert!(!result.has_examples);
    assert!(result.has_constraints);
    assert_eq!(result.overall_score, 75);
    assert_eq!(
        result.suggestions,
        vec![Suggestion::Examples.message().to_string()]
    );
}

#[test]
fn non_ascii_prompts_are_measured_in_characters() {
    // 40 characters, so no short-prompt penalty despite the multi-byte letters
    let result = evaluate_prompt("Ünïcödé prömpt with àccents, still fine?");

    assert_eq!(result.clarity, 60);
    assert_eq!(result.specificity, 40);
    assert_eq!(result.structure, 50);
    assert_eq!(result.overall_score, 30);
}

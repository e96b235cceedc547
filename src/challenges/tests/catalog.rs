use super::common::*;
use crate::challenges::domain::{ChallengeDifficulty, ChallengeId, ChallengeType};
use crate::challenges::{CatalogError, ChallengeCatalog};

#[test]
fn standard_catalog_covers_every_difficulty() {
    let catalog = ChallengeCatalog::standard();

    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.by_difficulty(ChallengeDifficulty::Beginner).len(), 4);
    assert_eq!(catalog.by_difficulty(ChallengeDifficulty::Intermediate).len(), 4);
    assert_eq!(catalog.by_difficulty(ChallengeDifficulty::Advanced).len(), 5);
    assert!(catalog
        .iter()
        .all(|challenge| challenge.broken_prompt.is_some() && !challenge.success_criteria.is_empty()));
}

#[test]
fn standard_catalog_ids_are_valid() {
    let challenges: Vec<_> = ChallengeCatalog::standard().iter().cloned().collect();

    let rebuilt = ChallengeCatalog::new(challenges).expect("unique, non-blank ids");
    let json = rebuilt
        .get(&ChallengeId::from("intermediate-1"))
        .expect("json challenge present");
    assert_eq!(json.kind, ChallengeType::EnforceJson);
    assert_eq!(json.points, 20);
}

#[test]
fn loads_catalog_from_json() {
    let raw = r#"[
        {
            "id": "custom-json",
            "title": "Shape the reply",
            "difficulty": "beginner",
            "type": "enforce-json",
            "brokenPrompt": "List colors",
            "successCriteria": ["Requests JSON format explicitly"],
            "points": 5
        }
    ]"#;

    let catalog = ChallengeCatalog::from_json_str(raw).expect("catalog parses");
    let challenge = catalog
        .get(&ChallengeId::from("custom-json"))
        .expect("challenge present");

    assert_eq!(challenge.kind, ChallengeType::EnforceJson);
    assert_eq!(challenge.broken_prompt.as_deref(), Some("List colors"));
    assert!(challenge.hints.is_empty());
}

#[test]
fn rejects_duplicate_ids() {
    let duplicated = vec![json_challenge(), json_challenge()];

    match ChallengeCatalog::new(duplicated) {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id.as_str(), "custom-1"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn rejects_blank_ids() {
    let mut blank = json_challenge();
    blank.id = ChallengeId(" ".to_string());

    assert!(matches!(
        ChallengeCatalog::new(vec![json_challenge(), blank]),
        Err(CatalogError::BlankId(1))
    ));
}

#[test]
fn rejects_unknown_challenge_types() {
    let raw = r#"[{"id": "x", "title": "x", "difficulty": "beginner", "type": "write-poem",
                   "successCriteria": [], "points": 1}]"#;

    assert!(matches!(
        ChallengeCatalog::from_json_str(raw),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn missing_catalog_file_reports_the_path() {
    let error = ChallengeCatalog::from_path("/nonexistent/challenges.json")
        .expect_err("file does not exist");

    assert!(error.to_string().contains("/nonexistent/challenges.json"));
}

#[test]
fn earned_points_count_each_passed_challenge_once() {
    let catalog = ChallengeCatalog::standard();
    let attempts = vec![
        attempt("beginner-1", false),
        attempt("beginner-1", true),
        attempt("beginner-1", true),
        attempt("intermediate-1", true),
        attempt("advanced-1", false),
        attempt("retired-challenge", true),
    ];

    assert_eq!(catalog.earned_points(&attempts), 30);
}

#[test]
fn progress_summarises_the_catalog() {
    let catalog = ChallengeCatalog::standard();
    let attempts = vec![attempt("beginner-2", true), attempt("advanced-5", true)];

    let progress = catalog.progress(&attempts);

    assert_eq!(progress.total_challenges, 13);
    assert_eq!(progress.completed_challenges, 2);
    assert_eq!(progress.total_points, 270);
    assert_eq!(progress.earned_points, 40);
}

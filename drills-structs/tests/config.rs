use drills_structs::config::SuiteConfig;
use drills_utils::jsonify;

const SUITE: &str = r#"{
    "challenges": {
        "n_queens_ii": { "difficulty": [8], "num_nonces": 3 },
        "open_the_lock": {
            "difficulty": [20],
            "num_nonces": 2,
            "algorithms": ["bfs", "bidirectional_bfs"]
        }
    }
}"#;

#[test]
fn test_load_suite_config() {
    let config = SuiteConfig::from_json(SUITE).unwrap();
    assert_eq!(config.challenges.len(), 2);
    assert_eq!(config.total_nonces(), 5);

    let queens = &config.challenges["n_queens_ii"];
    assert_eq!(queens.difficulty, vec![8]);
    assert_eq!(queens.algorithms(), None);
    assert_eq!(
        queens.selected_algorithms(&["backtracking", "bitmask"]),
        vec!["backtracking", "bitmask"]
    );

    let lock = &config.challenges["open_the_lock"];
    assert_eq!(
        lock.selected_algorithms(&["bfs", "bidirectional_bfs", "bfs_dense"]),
        vec!["bfs", "bidirectional_bfs"]
    );
}

#[test]
fn test_optional_fields_are_omitted() {
    let config = SuiteConfig::from_json(SUITE).unwrap();
    let json = jsonify(&config.challenges["n_queens_ii"]);
    assert_eq!(json, r#"{"difficulty":[8],"num_nonces":3}"#);
}

#[test]
fn test_missing_required_field_is_an_error() {
    assert!(SuiteConfig::from_json(r#"{"challenges":{"x":{"difficulty":[]}}}"#).is_err());
}

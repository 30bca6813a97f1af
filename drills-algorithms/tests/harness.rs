use drills_algorithms::harness::{
    algorithms_for, compute_solution, recommended_for, run_suite, verify_solution, CHALLENGE_IDS,
};
use drills_structs::{config::SuiteConfig, core::BenchmarkSettings};

const RAND_HASH: &str = "drills";
const NUM_NONCES: u64 = 8;

// small enough that every brute-force variant stays quick
fn difficulty_for(challenge_id: &str) -> Vec<i32> {
    match challenge_id {
        "boats_to_save_people" => vec![60, 50],
        "combinations" => vec![8],
        "container_with_most_water" => vec![80, 100],
        "extra_characters" => vec![60, 8, 4],
        "find_min_rotated" => vec![40],
        "invert_binary_tree" => vec![40],
        "k_closest_elements" => vec![50, 20],
        "level_order_traversal" => vec![40],
        "longest_common_prefix" => vec![6, 10],
        "longest_substring" => vec![80, 6],
        "min_stack" => vec![100, 50],
        "min_subarray_sum" => vec![60, 20],
        "n_queens_ii" => vec![8],
        "number_of_islands" => vec![12, 15, 45],
        "open_the_lock" => vec![300],
        "product_except_self" => vec![30, 20],
        "redundant_connection" => vec![40],
        "search_2d_matrix" => vec![6, 7],
        "search_rotated_array" => vec![40],
        "trapping_rain_water" => vec![80, 30],
        _ => vec![],
    }
}

#[test]
fn test_every_challenge_is_registered() {
    for &challenge_id in CHALLENGE_IDS {
        let algorithms = algorithms_for(challenge_id).unwrap();
        assert!(algorithms.len() >= 2, "{}", challenge_id);
        let recommended = recommended_for(challenge_id).unwrap();
        assert_eq!(algorithms[0], recommended, "{}", challenge_id);
    }
    assert!(algorithms_for("no_such_challenge").is_err());
}

#[test]
fn test_every_algorithm_verifies() {
    for &challenge_id in CHALLENGE_IDS {
        for &algorithm_id in algorithms_for(challenge_id).unwrap() {
            let settings = BenchmarkSettings {
                challenge_id: challenge_id.to_string(),
                algorithm_id: algorithm_id.to_string(),
                difficulty: difficulty_for(challenge_id),
            };
            for nonce in 0..NUM_NONCES {
                let output = compute_solution(&settings, RAND_HASH, nonce).unwrap();
                assert!(
                    !output.solution.is_empty(),
                    "{}/{} declined nonce {}",
                    challenge_id,
                    algorithm_id,
                    nonce
                );
                if let Err(e) = verify_solution(&settings, RAND_HASH, nonce, &output) {
                    panic!("{}/{} nonce {}: {}", challenge_id, algorithm_id, nonce, e);
                }
            }
        }
    }
}

#[test]
fn test_algorithms_agree_on_signatures() {
    for &challenge_id in CHALLENGE_IDS {
        for nonce in 0..NUM_NONCES {
            let signatures: Vec<u64> = algorithms_for(challenge_id)
                .unwrap()
                .iter()
                .map(|&algorithm_id| {
                    let settings = BenchmarkSettings {
                        challenge_id: challenge_id.to_string(),
                        algorithm_id: algorithm_id.to_string(),
                        difficulty: difficulty_for(challenge_id),
                    };
                    compute_solution(&settings, RAND_HASH, nonce)
                        .unwrap()
                        .calc_solution_signature()
                })
                .collect();
            assert!(
                signatures.windows(2).all(|w| w[0] == w[1]),
                "{} nonce {}: {:?}",
                challenge_id,
                nonce,
                signatures
            );
        }
    }
}

#[test]
fn test_tampered_solution_fails() {
    let settings = BenchmarkSettings {
        challenge_id: "trapping_rain_water".to_string(),
        algorithm_id: "two_pointers".to_string(),
        difficulty: vec![80, 30],
    };
    let mut output = compute_solution(&settings, RAND_HASH, 3).unwrap();
    assert!(verify_solution(&settings, RAND_HASH, 3, &output).is_ok());
    assert!(verify_solution(&settings, RAND_HASH, 4, &output).is_err());

    let water = output.solution["water"].as_i64().unwrap();
    output.solution.insert("water".to_string(), (water + 1).into());
    assert!(verify_solution(&settings, RAND_HASH, 3, &output).is_err());

    output.solution.insert("water".to_string(), "lots".into());
    assert!(verify_solution(&settings, RAND_HASH, 3, &output).is_err());

    output.solution.clear();
    assert!(verify_solution(&settings, RAND_HASH, 3, &output).is_err());
}

#[test]
fn test_unknown_ids() {
    let settings = BenchmarkSettings {
        challenge_id: "trapping_rain_water".to_string(),
        algorithm_id: "guesswork".to_string(),
        difficulty: vec![],
    };
    assert!(compute_solution(&settings, RAND_HASH, 0).is_err());

    let settings = BenchmarkSettings {
        challenge_id: "juggling".to_string(),
        algorithm_id: "two_pointers".to_string(),
        difficulty: vec![],
    };
    assert!(compute_solution(&settings, RAND_HASH, 0).is_err());
}

#[test]
fn test_run_suite() {
    let config = SuiteConfig::from_json(
        r#"{
            "challenges": {
                "n_queens_ii": { "difficulty": [7], "num_nonces": 3 },
                "open_the_lock": {
                    "difficulty": [200],
                    "num_nonces": 2,
                    "algorithms": ["bfs_dense"]
                }
            }
        }"#,
    )
    .unwrap();
    let summaries = run_suite(&config, RAND_HASH).unwrap();

    // one summary per (challenge, algorithm), challenges in key order
    assert_eq!(summaries.len(), 3 + 1);
    assert_eq!(summaries[0].challenge_id, "n_queens_ii");
    assert_eq!(summaries[0].algorithm_id, "backtracking");
    assert_eq!(summaries[3].challenge_id, "open_the_lock");
    assert_eq!(summaries[3].algorithm_id, "bfs_dense");
    assert!(summaries.iter().all(|s| s.all_verified()));
    assert_eq!(summaries[3].num_verified, 2);

    let bad = SuiteConfig::from_json(
        r#"{"challenges": {"n_queens_ii": {"difficulty": [], "num_nonces": 1, "algorithms": ["nope"]}}}"#,
    )
    .unwrap();
    assert!(run_suite(&bad, RAND_HASH).is_err());
}

#[test]
fn test_sample_suite_is_valid() {
    let config = SuiteConfig::from_json(include_str!("../../suite.json")).unwrap();
    assert!(config.total_nonces() > 0);
    for (challenge_id, challenge_config) in &config.challenges {
        let available = algorithms_for(challenge_id).unwrap();
        for name in challenge_config.selected_algorithms(available) {
            assert!(available.contains(&name), "{}/{}", challenge_id, name);
        }
    }
}

use anyhow::{anyhow, Result};
use drills_structs::{
    config::SuiteConfig,
    core::{BenchmarkSettings, NonceFailure, OutputData, RunSummary, Solution},
};
use drills_utils::{seed_to_hex, to_json_map};
use serde_json::Value;
use tracing::{debug, warn};

macro_rules! dispatch_challenges {
    (@ $challenge_id:expr, |$c:ident, $a:ident| $body:block, $( $name:ident ),+) => {
        match $challenge_id {
            $(
                stringify!($name) => {
                    #[allow(unused_imports)]
                    use drills_challenges::$name as $c;
                    #[allow(unused_imports)]
                    use crate::$name as $a;
                    $body
                }
            )+
            other => Err(anyhow!("Unknown challenge: {}", other)),
        }
    };
    ($challenge_id:expr, |$c:ident, $a:ident| $body:block) => {
        dispatch_challenges!(
            @ $challenge_id, |$c, $a| $body,
            boats_to_save_people,
            combinations,
            container_with_most_water,
            extra_characters,
            find_min_rotated,
            invert_binary_tree,
            k_closest_elements,
            level_order_traversal,
            longest_common_prefix,
            longest_substring,
            min_stack,
            min_subarray_sum,
            n_queens_ii,
            number_of_islands,
            open_the_lock,
            product_except_self,
            redundant_connection,
            search_2d_matrix,
            search_rotated_array,
            trapping_rain_water
        )
    };
}

pub const CHALLENGE_IDS: &[&str] = &[
    "boats_to_save_people",
    "combinations",
    "container_with_most_water",
    "extra_characters",
    "find_min_rotated",
    "invert_binary_tree",
    "k_closest_elements",
    "level_order_traversal",
    "longest_common_prefix",
    "longest_substring",
    "min_stack",
    "min_subarray_sum",
    "n_queens_ii",
    "number_of_islands",
    "open_the_lock",
    "product_except_self",
    "redundant_connection",
    "search_2d_matrix",
    "search_rotated_array",
    "trapping_rain_water",
];

pub fn algorithms_for(challenge_id: &str) -> Result<&'static [&'static str]> {
    dispatch_challenges!(challenge_id, |_c, a| { Ok(a::ALGORITHMS) })
}

pub fn recommended_for(challenge_id: &str) -> Result<&'static str> {
    dispatch_challenges!(challenge_id, |_c, a| { Ok(a::RECOMMENDED) })
}

/// Generates the instance for `nonce` and runs the configured algorithm on it.
/// An algorithm that declines the instance yields an empty solution.
pub fn compute_solution(
    settings: &BenchmarkSettings,
    rand_hash: &str,
    nonce: u64,
) -> Result<OutputData> {
    let seed = settings.calc_seed(rand_hash, nonce);
    dispatch_challenges!(settings.challenge_id.as_str(), |c, a| {
        let challenge = c::Challenge::generate_instance(&seed, &settings.difficulty.clone().into())?;
        let solve_challenge = a::get_algorithm(&settings.algorithm_id).ok_or_else(|| {
            anyhow!(
                "Unknown algorithm '{}' for challenge '{}'",
                settings.algorithm_id,
                settings.challenge_id
            )
        })?;
        let solution = match solve_challenge(&challenge)? {
            Some(s) => to_json_map(&s)?,
            None => {
                debug!(
                    challenge = %settings.challenge_id,
                    algorithm = %settings.algorithm_id,
                    nonce,
                    seed = %seed_to_hex(&seed),
                    "algorithm declined instance"
                );
                Solution::new()
            }
        };
        Ok(OutputData { nonce, solution })
    })
}

pub fn verify_solution(
    settings: &BenchmarkSettings,
    rand_hash: &str,
    nonce: u64,
    output: &OutputData,
) -> Result<()> {
    if output.nonce != nonce {
        return Err(anyhow!(
            "Output is for nonce {}, expected {}",
            output.nonce,
            nonce
        ));
    }
    if output.solution.is_empty() {
        return Err(anyhow!("No solution for nonce {}", nonce));
    }
    let seed = settings.calc_seed(rand_hash, nonce);
    dispatch_challenges!(settings.challenge_id.as_str(), |c, _a| {
        let challenge = c::Challenge::generate_instance(&seed, &settings.difficulty.clone().into())?;
        let solution: c::Solution = serde_json::from_value(Value::Object(output.solution.clone()))
            .map_err(|e| anyhow!("Malformed solution for nonce {}: {}", nonce, e))?;
        challenge.verify_solution(&solution)
    })
}

/// Runs every selected algorithm of every configured challenge over nonces
/// `0..num_nonces`, verifying each output. Verification failures are recorded
/// in the summaries; configuration errors abort the run.
pub fn run_suite(config: &SuiteConfig, rand_hash: &str) -> Result<Vec<RunSummary>> {
    let mut summaries = Vec::new();
    for (challenge_id, challenge_config) in &config.challenges {
        let available = algorithms_for(challenge_id)?;
        for algorithm_id in challenge_config.selected_algorithms(available) {
            if !available.contains(&algorithm_id) {
                return Err(anyhow!(
                    "Unknown algorithm '{}' for challenge '{}'",
                    algorithm_id,
                    challenge_id
                ));
            }
            let settings = BenchmarkSettings {
                challenge_id: challenge_id.clone(),
                algorithm_id: algorithm_id.to_string(),
                difficulty: challenge_config.difficulty.clone(),
            };
            let mut summary = RunSummary {
                challenge_id: challenge_id.clone(),
                algorithm_id: algorithm_id.to_string(),
                num_nonces: challenge_config.num_nonces,
                num_verified: 0,
                failures: Vec::new(),
            };
            for nonce in 0..challenge_config.num_nonces {
                let result = compute_solution(&settings, rand_hash, nonce)
                    .and_then(|output| verify_solution(&settings, rand_hash, nonce, &output));
                match result {
                    Ok(()) => summary.num_verified += 1,
                    Err(e) => {
                        warn!(
                            challenge = %challenge_id,
                            algorithm = %algorithm_id,
                            nonce,
                            seed = %seed_to_hex(&settings.calc_seed(rand_hash, nonce)),
                            "{}",
                            e
                        );
                        summary.failures.push(NonceFailure {
                            nonce,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            debug!(
                challenge = %challenge_id,
                algorithm = %algorithm_id,
                verified = summary.num_verified,
                nonces = summary.num_nonces,
                "finished run"
            );
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

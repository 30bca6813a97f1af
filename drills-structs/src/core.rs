use crate::serializable_struct_with_getters;
use drills_utils::{jsonify, u64_from_str, u8s_from_str};
use serde_json::{Map, Value};

pub type Solution = Map<String, Value>;

serializable_struct_with_getters! {
    BenchmarkSettings {
        challenge_id: String,
        algorithm_id: String,
        difficulty: Vec<i32>,
    }
}
impl BenchmarkSettings {
    pub fn calc_seed(&self, rand_hash: &str, nonce: u64) -> [u8; 32] {
        u8s_from_str(&format!("{}_{}_{}", jsonify(self), rand_hash, nonce))
    }
}
serializable_struct_with_getters! {
    OutputData {
        nonce: u64,
        solution: Solution,
    }
}
impl OutputData {
    /// Depends only on the answer, so two algorithms agreeing on a nonce
    /// produce the same signature.
    pub fn calc_solution_signature(&self) -> u64 {
        u64_from_str(&jsonify(&self.solution))
    }
}
serializable_struct_with_getters! {
    RunSummary {
        challenge_id: String,
        algorithm_id: String,
        num_nonces: u64,
        num_verified: u64,
        failures: Vec<NonceFailure>,
    }
}
serializable_struct_with_getters! {
    NonceFailure {
        nonce: u64,
        reason: String,
    }
}
impl RunSummary {
    pub fn all_verified(&self) -> bool {
        self.num_verified == self.num_nonces && self.failures.is_empty()
    }
}

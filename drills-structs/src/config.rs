use crate::serializable_struct_with_getters;
use std::collections::BTreeMap;

serializable_struct_with_getters! {
    SuiteConfig {
        challenges: BTreeMap<String, ChallengeConfig>,
    }
}
serializable_struct_with_getters! {
    ChallengeConfig {
        difficulty: Vec<i32>,
        num_nonces: u64,
        algorithms: Option<Vec<String>>,
    }
}

impl SuiteConfig {
    pub fn from_json(json_str: &str) -> serde_json::Result<Self> {
        drills_utils::dejsonify(json_str)
    }

    pub fn total_nonces(&self) -> u64 {
        self.challenges.values().map(|c| c.num_nonces).sum()
    }
}

impl ChallengeConfig {
    /// Algorithms to run, falling back to `available` when none are pinned.
    pub fn selected_algorithms<'a>(&'a self, available: &[&'a str]) -> Vec<&'a str> {
        match self.algorithms() {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => available.to_vec(),
        }
    }
}

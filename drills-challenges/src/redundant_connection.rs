use anyhow::{anyhow, Result};
use drills_utils::UnionFind;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct Difficulty {
    pub num_nodes: usize,
}

impl_difficulty_vec!(Difficulty {
    num_nodes: usize = 16, 3..=2_000;
});

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub edge: Option<[usize; 2]>,
}

/// An undirected graph on nodes `1..=n` with `n` edges: a tree plus one
/// extra edge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub edges: Vec<[usize; 2]>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let n = difficulty.num_nodes;

        let mut labels: Vec<usize> = (1..=n).collect();
        labels.shuffle(&mut rng);

        // random recursive tree: node i hangs off an earlier node
        let mut edges: Vec<[usize; 2]> = (1..n)
            .map(|i| [labels[rng.gen_range(0..i)], labels[i]])
            .collect();
        let adjacent: HashSet<(usize, usize)> = edges
            .iter()
            .map(|&[a, b]| (a.min(b), a.max(b)))
            .collect();

        let mut attempts = 0;
        let extra = loop {
            attempts += 1;
            let a = rng.gen_range(1..=n);
            let b = rng.gen_range(1..=n);
            if a != b && !adjacent.contains(&(a.min(b), a.max(b))) {
                break [a, b];
            }
        };
        debug!(attempts, ?extra, "picked redundant edge");
        edges.push(extra);

        for edge in edges.iter_mut() {
            if rng.gen_bool(0.5) {
                edge.swap(0, 1);
            }
        }
        edges.shuffle(&mut rng);

        Ok(Self {
            seed: seed.clone(),
            edges,
        })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected = last_removable_edge(&self.edges);
            if solution.edge != expected {
                return Err(anyhow!(
                    "Redundant edge ({:?}) does not match expected ({:?})",
                    solution.edge,
                    expected
                ));
            }
            Ok(())
        }
    );
}

// Scan from the back for the first edge whose removal leaves a spanning tree.
fn last_removable_edge(edges: &[[usize; 2]]) -> Option<[usize; 2]> {
    let n = edges.len();
    if edges.iter().flatten().any(|&v| v == 0 || v > n) {
        return None;
    }
    (0..n).rev().map(|skip| (skip, edges[skip])).find(|&(skip, _)| {
        let mut uf = UnionFind::new(n + 1);
        edges
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .all(|(_, &[a, b])| uf.union(a, b))
    })
    .map(|(_, edge)| edge)
}

use anyhow::Result;
use drills_challenges::redundant_connection::*;
use drills_utils::UnionFind;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        edge: find_redundant_connection(&challenge.edges),
    }))
}

/// The edge that closes the cycle in a tree with one extra edge. Nodes are
/// labelled `1..=n` with `n` the number of edges; any other label gives `None`.
pub fn find_redundant_connection(edges: &[[usize; 2]]) -> Option<[usize; 2]> {
    let n = edges.len();
    if edges.iter().flatten().any(|&v| v == 0 || v > n) {
        return None;
    }
    let mut uf = UnionFind::new(n + 1);
    edges.iter().copied().find(|&[a, b]| !uf.union(a, b))
}

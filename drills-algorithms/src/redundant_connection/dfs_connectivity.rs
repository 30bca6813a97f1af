use anyhow::Result;
use drills_challenges::redundant_connection::*;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    Ok(Some(Solution {
        edge: find_redundant_connection(&challenge.edges),
    }))
}

/// Adds edges one at a time and, before each, searches the graph built so
/// far for an existing path between its ends. O(n^2).
pub fn find_redundant_connection(edges: &[[usize; 2]]) -> Option<[usize; 2]> {
    let n = edges.len();
    if edges.iter().flatten().any(|&v| v == 0 || v > n) {
        return None;
    }
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
    let mut seen = vec![0usize; n + 1];
    for (round, &[a, b]) in edges.iter().enumerate() {
        if connected(&adjacency, &mut seen, round + 1, a, b) {
            return Some([a, b]);
        }
        adjacency[a].push(b);
        adjacency[b].push(a);
    }
    None
}

// `seen[v] == stamp` marks v as visited in this round, so the buffer is never cleared.
fn connected(adjacency: &[Vec<usize>], seen: &mut [usize], stamp: usize, from: usize, to: usize) -> bool {
    let mut stack = vec![from];
    seen[from] = stamp;
    while let Some(v) = stack.pop() {
        if v == to {
            return true;
        }
        for &w in &adjacency[v] {
            if seen[w] != stamp {
                seen[w] = stamp;
                stack.push(w);
            }
        }
    }
    false
}

use drills_challenges::search_2d_matrix::{Challenge, Solution};

pub mod brute_force;
pub mod flat_binary_search;
pub mod row_then_column;
pub mod staircase;

register_algorithms!(
    recommended: flat_binary_search,
    [flat_binary_search, row_then_column, staircase, brute_force]
);

pub(crate) fn is_rectangular(matrix: &[Vec<i32>]) -> bool {
    matrix.windows(2).all(|w| w[0].len() == w[1].len())
}

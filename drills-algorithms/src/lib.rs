use ahash::RandomState;
pub fn seeded_hasher(seed: &[u8; 32]) -> RandomState {
    let seed1 = u64::from_be_bytes(seed[0..8].try_into().unwrap());
    let seed2 = u64::from_be_bytes(seed[8..16].try_into().unwrap());
    let seed3 = u64::from_be_bytes(seed[16..24].try_into().unwrap());
    let seed4 = u64::from_be_bytes(seed[24..32].try_into().unwrap());
    RandomState::with_seeds(seed1, seed2, seed3, seed4)
}
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;
pub(crate) type HashSet<T> = std::collections::HashSet<T, RandomState>;

pub type SolveFn<C, S> = fn(&C) -> anyhow::Result<Option<S>>;

/// Exposes a challenge's variants by name. Each listed module must export
/// `solve_challenge`; `Challenge` and `Solution` must be in scope.
macro_rules! register_algorithms {
    (recommended: $rec:ident, [$($algo:ident),+ $(,)?]) => {
        pub use self::$rec as recommended;

        pub const RECOMMENDED: &str = stringify!($rec);
        pub const ALGORITHMS: &[&str] = &[$(stringify!($algo)),+];

        pub fn get_algorithm(name: &str) -> Option<$crate::SolveFn<Challenge, Solution>> {
            $(
                if name == stringify!($algo) {
                    return Some($algo::solve_challenge);
                }
            )+
            None
        }
    };
}

pub mod harness;

pub mod boats_to_save_people;
pub mod combinations;
pub mod container_with_most_water;
pub mod extra_characters;
pub mod find_min_rotated;
pub mod invert_binary_tree;
pub mod k_closest_elements;
pub mod level_order_traversal;
pub mod longest_common_prefix;
pub mod longest_substring;
pub mod min_stack;
pub mod min_subarray_sum;
pub mod n_queens_ii;
pub mod number_of_islands;
pub mod open_the_lock;
pub mod product_except_self;
pub mod redundant_connection;
pub mod search_2d_matrix;
pub mod search_rotated_array;
pub mod trapping_rain_water;

use drills_challenges::k_closest_elements::{Challenge, Solution};

pub mod binary_search_window;
pub mod max_heap;
pub mod quickselect;
pub mod sort_by_distance;
pub mod two_pointer_shrink;

register_algorithms!(
    recommended: binary_search_window,
    [binary_search_window, two_pointer_shrink, sort_by_distance, max_heap, quickselect]
);

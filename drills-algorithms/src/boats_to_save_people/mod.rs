pub use drills_challenges::boats_to_save_people::{Challenge, Solution};

pub mod counting_sort;
pub mod sort_two_pointers;

register_algorithms!(recommended: sort_two_pointers, [sort_two_pointers, counting_sort]);

macro_rules! conditional_pub {
    (fn $name:ident $($rest:tt)*) => {
        #[cfg(not(feature = "hide_verification"))]
        pub fn $name $($rest)*

        #[cfg(feature = "hide_verification")]
        #[allow(dead_code)]
        fn $name $($rest)*
    };
}

/// `From<Vec<i32>>` / `Into<Vec<i32>>` for a difficulty struct whose fields
/// are all integers. Missing entries take the listed default and every value
/// is clamped to its range.
macro_rules! impl_difficulty_vec {
    ($name:ident { $( $field:ident : $ty:ty = $default:literal, $min:literal ..= $max:literal );+ $(;)? }) => {
        impl From<Vec<i32>> for $name {
            fn from(arr: Vec<i32>) -> Self {
                let mut values = arr.into_iter();
                Self {
                    $(
                        $field: values
                            .next()
                            .unwrap_or($default)
                            .clamp($min, $max) as $ty,
                    )+
                }
            }
        }

        impl From<$name> for Vec<i32> {
            fn from(d: $name) -> Self {
                vec![$( d.$field as i32 ),+]
            }
        }
    };
}

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

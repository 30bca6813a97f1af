use drills_algorithms::{
    find_min_rotated, k_closest_elements, search_2d_matrix, search_rotated_array,
};

#[test]
fn test_search_matrix() {
    use search_2d_matrix::{brute_force, flat_binary_search, row_then_column, staircase};

    let matrix = vec![vec![1, 3, 5, 7], vec![10, 11, 16, 20], vec![23, 30, 34, 60]];
    for f in [
        flat_binary_search::search_matrix,
        row_then_column::search_matrix,
        staircase::search_matrix,
        brute_force::search_matrix,
    ] {
        assert!(f(&matrix, 3));
        assert!(f(&matrix, 60));
        assert!(f(&matrix, 1));
        assert!(!f(&matrix, 13));
        assert!(!f(&matrix, 0));
        assert!(!f(&matrix, 61));
        assert!(!f(&[], 1));
        assert!(!f(&[vec![], vec![]], 1));
    }

    let ragged = vec![vec![1], vec![2, 3, 4]];
    assert!(row_then_column::search_matrix(&ragged, 4));
    assert!(!flat_binary_search::search_matrix(&ragged, 4));
}

#[test]
fn test_search_rotated() {
    use search_rotated_array::{linear_scan, one_pass_binary_search, pivot_then_search};

    for f in [
        one_pass_binary_search::search,
        pivot_then_search::search,
        linear_scan::search,
    ] {
        assert_eq!(f(&[4, 5, 6, 7, 0, 1, 2], 0), 4);
        assert_eq!(f(&[4, 5, 6, 7, 0, 1, 2], 3), -1);
        assert_eq!(f(&[4, 5, 6, 7, 0, 1, 2], 4), 0);
        assert_eq!(f(&[4, 5, 6, 7, 0, 1, 2], 7), 3);
        assert_eq!(f(&[1], 0), -1);
        assert_eq!(f(&[1], 1), 0);
        assert_eq!(f(&[1, 3], 3), 1);
        assert_eq!(f(&[3, 1], 1), 1);
        assert_eq!(f(&[], 5), -1);
    }
}

#[test]
fn test_find_min() {
    use find_min_rotated::{binary_search, linear_scan};

    for f in [binary_search::find_min, linear_scan::find_min] {
        assert_eq!(f(&[3, 4, 5, 1, 2]), Some(1));
        assert_eq!(f(&[4, 5, 6, 7, 0, 1, 2]), Some(0));
        assert_eq!(f(&[11, 13, 15, 17]), Some(11));
        assert_eq!(f(&[2, 1]), Some(1));
        assert_eq!(f(&[]), None);
    }
    assert_eq!(binary_search::min_index(&[4, 5, 6, 7, 0, 1, 2]), Some(4));
}

#[test]
fn test_find_closest_elements() {
    use k_closest_elements::{
        binary_search_window, max_heap, quickselect, sort_by_distance, two_pointer_shrink,
    };

    for f in [
        binary_search_window::find_closest_elements,
        two_pointer_shrink::find_closest_elements,
        sort_by_distance::find_closest_elements,
        max_heap::find_closest_elements,
        quickselect::find_closest_elements,
    ] {
        assert_eq!(f(&[1, 2, 3, 4, 5], 4, 3), vec![1, 2, 3, 4]);
        assert_eq!(f(&[1, 2, 3, 4, 5], 4, -1), vec![1, 2, 3, 4]);
        assert_eq!(f(&[1, 1, 2, 3, 4, 5], 4, -1), vec![1, 1, 2, 3]);
        assert_eq!(f(&[1, 2, 3, 4, 5], 2, 10), vec![4, 5]);
        assert_eq!(f(&[1, 3], 1, 2), vec![1]);
        assert_eq!(f(&[1, 2], 5, 9), vec![1, 2]);
        assert!(f(&[1, 2, 3], 0, 2).is_empty());
        assert!(f(&[], 3, 0).is_empty());
    }
}

use drills_challenges::*;
use drills_utils::TreeNode;

const SEED: [u8; 32] = [0; 32];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_trapping_rain_water() {
    let c = trapping_rain_water::Challenge {
        seed: SEED,
        heights: vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1],
    };
    assert!(c.verify_solution(&trapping_rain_water::Solution { water: 6 }).is_ok());
    assert!(c.verify_solution(&trapping_rain_water::Solution { water: 5 }).is_err());

    let c = trapping_rain_water::Challenge {
        seed: SEED,
        heights: vec![-1, -3, -2, -1],
    };
    assert!(c.verify_solution(&trapping_rain_water::Solution { water: 3 }).is_ok());
}

#[test]
fn test_container_with_most_water() {
    let c = container_with_most_water::Challenge {
        seed: SEED,
        heights: vec![1, 8, 6, 2, 5, 4, 8, 3, 7],
    };
    assert!(c.verify_solution(&container_with_most_water::Solution { area: 49 }).is_ok());
    assert!(c.verify_solution(&container_with_most_water::Solution { area: 48 }).is_err());
}

#[test]
fn test_boats_to_save_people() {
    let c = boats_to_save_people::Challenge {
        seed: SEED,
        people: vec![3, 2, 2, 1],
        limit: 3,
    };
    assert!(c.verify_solution(&boats_to_save_people::Solution { boats: Some(3) }).is_ok());
    assert!(c.verify_solution(&boats_to_save_people::Solution { boats: Some(2) }).is_err());

    let c = boats_to_save_people::Challenge {
        seed: SEED,
        people: vec![5, 1],
        limit: 4,
    };
    assert!(c.verify_solution(&boats_to_save_people::Solution { boats: None }).is_ok());

    let c = boats_to_save_people::Challenge {
        seed: SEED,
        people: vec![i32::MAX, i32::MAX - 1, 1],
        limit: i32::MAX,
    };
    assert!(c.verify_solution(&boats_to_save_people::Solution { boats: Some(2) }).is_ok());
}

#[test]
fn test_open_the_lock() {
    let c = open_the_lock::Challenge {
        seed: SEED,
        deadends: strings(&["0201", "0101", "0102", "1212", "2002"]),
        target: "0202".to_string(),
    };
    assert!(c.verify_solution(&open_the_lock::Solution { turns: 6 }).is_ok());
    assert!(c.verify_solution(&open_the_lock::Solution { turns: 8 }).is_err());

    let c = open_the_lock::Challenge {
        seed: SEED,
        deadends: strings(&["8887", "8889", "8878", "8898", "8788", "8988", "7888", "9888"]),
        target: "8888".to_string(),
    };
    assert!(c.verify_solution(&open_the_lock::Solution { turns: -1 }).is_ok());
}

#[test]
fn test_redundant_connection() {
    let c = redundant_connection::Challenge {
        seed: SEED,
        edges: vec![[1, 2], [1, 3], [2, 3]],
    };
    let ok = redundant_connection::Solution { edge: Some([2, 3]) };
    assert!(c.verify_solution(&ok).is_ok());
    let wrong = redundant_connection::Solution { edge: Some([1, 2]) };
    assert!(c.verify_solution(&wrong).is_err());

    let c = redundant_connection::Challenge {
        seed: SEED,
        edges: vec![[1, 2], [2, 3], [3, 4], [1, 4], [1, 5]],
    };
    let ok = redundant_connection::Solution { edge: Some([1, 4]) };
    assert!(c.verify_solution(&ok).is_ok());
}

#[test]
fn test_combinations() {
    let c = combinations::Challenge { seed: SEED, n: 4, k: 2 };
    let ok = combinations::Solution {
        combinations: vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![2, 4],
            vec![3, 4],
        ],
    };
    assert!(c.verify_solution(&ok).is_ok());

    let mut out_of_order = ok.clone();
    out_of_order.combinations.swap(0, 1);
    assert!(c.verify_solution(&out_of_order).is_err());

    let mut duplicated = ok.clone();
    duplicated.combinations[1] = vec![1, 2];
    assert!(c.verify_solution(&duplicated).is_err());

    let c = combinations::Challenge { seed: SEED, n: 3, k: 0 };
    let ok = combinations::Solution { combinations: vec![vec![]] };
    assert!(c.verify_solution(&ok).is_ok());

    assert_eq!(combinations::binomial(20, 10), 184_756);
    assert_eq!(combinations::binomial(3, 4), 0);
}

#[test]
fn test_n_queens_ii() {
    let c = n_queens_ii::Challenge { seed: SEED, n: 8 };
    assert!(c.verify_solution(&n_queens_ii::Solution { count: 92 }).is_ok());
    assert!(c.verify_solution(&n_queens_ii::Solution { count: 90 }).is_err());
}

#[test]
fn test_min_stack() {
    use min_stack::Operation::*;
    let c = min_stack::Challenge {
        seed: SEED,
        operations: vec![Push(-2), Push(0), Push(-3), GetMin, Pop, Top, GetMin, Pop, Pop, Pop, GetMin],
    };
    let ok = min_stack::Solution {
        outputs: vec![
            None,
            None,
            None,
            Some(-3),
            Some(-3),
            Some(0),
            Some(-2),
            Some(0),
            Some(-2),
            None,
            None,
        ],
    };
    assert!(c.verify_solution(&ok).is_ok());

    let mut wrong = ok.clone();
    wrong.outputs[6] = Some(-3);
    assert!(c.verify_solution(&wrong).is_err());
}

#[test]
fn test_min_stack_long_script() {
    use min_stack::Operation::*;
    let n = 200_000;
    let mut operations: Vec<min_stack::Operation> = (0..n as i32).rev().map(Push).collect();
    operations.extend(std::iter::repeat(GetMin).take(n));
    let mut outputs = vec![None; n];
    outputs.extend(std::iter::repeat(Some(0)).take(n));

    let c = min_stack::Challenge { seed: SEED, operations };
    assert!(c.verify_solution(&min_stack::Solution { outputs }).is_ok());
}

#[test]
fn test_invert_binary_tree() {
    let root = TreeNode::from_level_order(&[Some(4), Some(2), Some(7), Some(1), Some(3), Some(6), Some(9)]);
    let c = invert_binary_tree::Challenge { seed: SEED, root };
    let inverted =
        TreeNode::from_level_order(&[Some(4), Some(7), Some(2), Some(9), Some(6), Some(3), Some(1)]);
    assert!(c
        .verify_solution(&invert_binary_tree::Solution { root: inverted })
        .is_ok());
    assert!(c
        .verify_solution(&invert_binary_tree::Solution { root: c.root.clone() })
        .is_err());

    let empty = invert_binary_tree::Challenge { seed: SEED, root: None };
    assert!(empty
        .verify_solution(&invert_binary_tree::Solution { root: None })
        .is_ok());
}

#[test]
fn test_level_order_traversal() {
    let root = TreeNode::from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
    let c = level_order_traversal::Challenge { seed: SEED, root };
    let ok = level_order_traversal::Solution {
        levels: vec![vec![3], vec![9, 20], vec![15, 7]],
    };
    assert!(c.verify_solution(&ok).is_ok());
    let wrong = level_order_traversal::Solution {
        levels: vec![vec![3], vec![20, 9], vec![15, 7]],
    };
    assert!(c.verify_solution(&wrong).is_err());
}

#[test]
fn test_extra_characters() {
    let c = extra_characters::Challenge {
        seed: SEED,
        text: "leetscode".to_string(),
        dictionary: strings(&["leet", "code", "leetcode"]),
    };
    assert!(c.verify_solution(&extra_characters::Solution { extra: 1 }).is_ok());

    let c = extra_characters::Challenge {
        seed: SEED,
        text: "sayhelloworld".to_string(),
        dictionary: strings(&["hello", "world"]),
    };
    assert!(c.verify_solution(&extra_characters::Solution { extra: 3 }).is_ok());
    assert!(c.verify_solution(&extra_characters::Solution { extra: 0 }).is_err());
}

#[test]
fn test_longest_common_prefix() {
    let c = longest_common_prefix::Challenge {
        seed: SEED,
        strings: strings(&["flower", "flow", "flight"]),
    };
    let ok = longest_common_prefix::Solution { prefix: "fl".to_string() };
    assert!(c.verify_solution(&ok).is_ok());
    let wrong = longest_common_prefix::Solution { prefix: "f".to_string() };
    assert!(c.verify_solution(&wrong).is_err());

    let c = longest_common_prefix::Challenge {
        seed: SEED,
        strings: strings(&["dog", "racecar", "car"]),
    };
    let ok = longest_common_prefix::Solution { prefix: String::new() };
    assert!(c.verify_solution(&ok).is_ok());
}

#[test]
fn test_search_2d_matrix() {
    let matrix = vec![vec![1, 3, 5, 7], vec![10, 11, 16, 20], vec![23, 30, 34, 60]];
    let c = search_2d_matrix::Challenge {
        seed: SEED,
        matrix: matrix.clone(),
        target: 3,
    };
    assert!(c.verify_solution(&search_2d_matrix::Solution { found: true }).is_ok());
    let c = search_2d_matrix::Challenge {
        seed: SEED,
        matrix,
        target: 13,
    };
    assert!(c.verify_solution(&search_2d_matrix::Solution { found: false }).is_ok());
    assert!(c.verify_solution(&search_2d_matrix::Solution { found: true }).is_err());
}

#[test]
fn test_rotated_arrays() {
    let c = search_rotated_array::Challenge {
        seed: SEED,
        nums: vec![4, 5, 6, 7, 0, 1, 2],
        target: 0,
    };
    assert!(c.verify_solution(&search_rotated_array::Solution { index: 4 }).is_ok());
    assert!(c.verify_solution(&search_rotated_array::Solution { index: -1 }).is_err());

    let c = find_min_rotated::Challenge {
        seed: SEED,
        nums: vec![3, 4, 5, 1, 2],
    };
    assert!(c.verify_solution(&find_min_rotated::Solution { min: Some(1) }).is_ok());
    assert!(c.verify_solution(&find_min_rotated::Solution { min: Some(3) }).is_err());

    let c = find_min_rotated::Challenge { seed: SEED, nums: vec![] };
    assert!(c.verify_solution(&find_min_rotated::Solution { min: None }).is_ok());
}

#[test]
fn test_k_closest_elements() {
    let c = k_closest_elements::Challenge {
        seed: SEED,
        arr: vec![1, 2, 3, 4, 5],
        k: 4,
        x: 3,
    };
    let ok = k_closest_elements::Solution { values: vec![1, 2, 3, 4] };
    assert!(c.verify_solution(&ok).is_ok());
    let wrong = k_closest_elements::Solution { values: vec![2, 3, 4, 5] };
    assert!(c.verify_solution(&wrong).is_err());

    let c = k_closest_elements::Challenge {
        seed: SEED,
        arr: vec![1, 2],
        k: 5,
        x: 9,
    };
    let ok = k_closest_elements::Solution { values: vec![1, 2] };
    assert!(c.verify_solution(&ok).is_ok());
}

#[test]
fn test_sliding_windows() {
    let c = longest_substring::Challenge {
        seed: SEED,
        text: "abcabcbb".to_string(),
    };
    assert!(c.verify_solution(&longest_substring::Solution { length: 3 }).is_ok());
    assert!(c.verify_solution(&longest_substring::Solution { length: 4 }).is_err());

    let c = min_subarray_sum::Challenge {
        seed: SEED,
        target: 7,
        nums: vec![2, 3, 1, 2, 4, 3],
    };
    assert!(c.verify_solution(&min_subarray_sum::Solution { length: 2 }).is_ok());
    let c = min_subarray_sum::Challenge {
        seed: SEED,
        target: 11,
        nums: vec![1, 1, 1, 1, 1, 1, 1, 1],
    };
    assert!(c.verify_solution(&min_subarray_sum::Solution { length: 0 }).is_ok());
}

#[test]
fn test_number_of_islands() {
    let grid = vec![
        vec![true, true, false, false, false],
        vec![true, true, false, false, false],
        vec![false, false, true, false, false],
        vec![false, false, false, true, true],
    ];
    let c = number_of_islands::Challenge { seed: SEED, grid };
    assert!(c.verify_solution(&number_of_islands::Solution { islands: 3 }).is_ok());
    assert!(c.verify_solution(&number_of_islands::Solution { islands: 2 }).is_err());

    let ragged = vec![vec![true], vec![true, true, false, true]];
    let c = number_of_islands::Challenge { seed: SEED, grid: ragged };
    assert!(c.verify_solution(&number_of_islands::Solution { islands: 2 }).is_ok());
}

#[test]
fn test_product_except_self() {
    let c = product_except_self::Challenge {
        seed: SEED,
        nums: vec![1, 2, 3, 4],
    };
    let ok = product_except_self::Solution { products: vec![24, 12, 8, 6] };
    assert!(c.verify_solution(&ok).is_ok());
    let short = product_except_self::Solution { products: vec![24, 12, 8] };
    assert!(c.verify_solution(&short).is_err());

    let c = product_except_self::Challenge {
        seed: SEED,
        nums: vec![-1, 1, 0, -3, 3],
    };
    let ok = product_except_self::Solution { products: vec![0, 0, 9, 0, 0] };
    assert!(c.verify_solution(&ok).is_ok());
}

use drills_challenges::{
    boats_to_save_people, extra_characters, n_queens_ii, number_of_islands, trapping_rain_water,
};

#[test]
fn test_missing_entries_take_defaults() {
    let d: trapping_rain_water::Difficulty = vec![].into();
    assert_eq!(d.num_bars, 64);
    assert_eq!(d.max_height, 100);

    let d: number_of_islands::Difficulty = vec![3].into();
    assert_eq!(d.num_rows, 3);
    assert_eq!(d.num_cols, 8);
    assert_eq!(d.land_percent, 45);
}

#[test]
fn test_values_are_clamped() {
    let d: n_queens_ii::Difficulty = vec![99].into();
    assert_eq!(d.max_n, 14);

    let d: boats_to_save_people::Difficulty = vec![-5, 0].into();
    assert_eq!(d.num_people, 0);
    assert_eq!(d.limit, 1);

    let d: extra_characters::Difficulty = vec![10, 3, 40].into();
    assert_eq!(d.alphabet_size, 26);
}

#[test]
fn test_round_trip_to_vec() {
    let d: number_of_islands::Difficulty = vec![5, 6, 70].into();
    let v: Vec<i32> = d.into();
    assert_eq!(v, vec![5, 6, 70]);
}

use rstest::rstest;

use prepkit::topics::arrays::{
    defuse, delete_minimums, diagonal_sum, goldilocks_number, good_pairs, highest_altitude,
    left_right_difference, linear_search, local_maximums, move_zeroes, non_decreasing,
    pascal_triangle, running_sum, smaller_than_current, wealthiest_customer,
};

#[rstest]
fn test_linear_search_finds_first_occurrence() {
    assert_eq!(linear_search(&[5, 3, 7, 3], 3), Some(1));
    assert_eq!(linear_search(&[5, 3, 7], 9), None);
    assert_eq!(linear_search(&[], 1), None);
}

#[rstest]
fn test_running_sum() {
    assert_eq!(running_sum(&[1, 2, 3, 4]), vec![1, 3, 6, 10]);
    assert_eq!(running_sum(&[]), Vec::<i64>::new());
}

#[rstest]
fn test_smaller_than_current_handles_duplicates() {
    assert_eq!(smaller_than_current(&[8, 1, 2, 2, 3]), vec![4, 0, 1, 1, 3]);
    assert_eq!(smaller_than_current(&[7, 7, 7]), vec![0, 0, 0]);
}

#[rstest]
fn test_diagonal_sum_counts_center_once() {
    let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    assert_eq!(diagonal_sum(&grid), 25);
    let grid = vec![vec![1, 1], vec![1, 1]];
    assert_eq!(diagonal_sum(&grid), 4);
}

#[rstest]
#[case(&[5, 7, 1, 4], 3, vec![12, 10, 16, 13])]
#[case(&[1, 2, 3, 4], 0, vec![0, 0, 0, 0])]
#[case(&[2, 4, 9, 3], -2, vec![12, 5, 6, 13])]
fn test_defuse_circular_sums(#[case] code: &[i64], #[case] k: i64, #[case] expected: Vec<i64>) {
    assert_eq!(defuse(code, k), expected);
}

#[rstest]
#[case(&[4, 2, 3], true)]
#[case(&[4, 2, 1], false)]
#[case(&[3, 4, 2, 3], false)]
#[case(&[5, 7, 1, 8], true)]
#[case(&[1, 2, 3], true)]
#[case(&[1], true)]
fn test_non_decreasing(#[case] nums: &[i64], #[case] expected: bool) {
    assert_eq!(non_decreasing(nums), expected);
}

#[rstest]
fn test_good_pairs_divisibility() {
    assert_eq!(good_pairs(&[1, 3, 4], &[1, 3, 4], 1), 5);
    assert_eq!(good_pairs(&[1, 2, 4, 12], &[2, 4], 3), 2);
}

#[rstest]
fn test_wealthiest_customer_prefers_first_on_tie() {
    let accounts = vec![vec![1, 2, 3], vec![3, 2, 1]];
    assert_eq!(wealthiest_customer(&accounts), Some((0, 6)));
    let accounts = vec![vec![1, 5], vec![7, 3], vec![3, 5]];
    assert_eq!(wealthiest_customer(&accounts), Some((1, 10)));
    assert_eq!(wealthiest_customer(&[]), None);
}

#[rstest]
fn test_left_right_difference() {
    assert_eq!(left_right_difference(&[10, 4, 8, 3]), vec![-15, -1, 11, 22]);
    assert_eq!(left_right_difference(&[1]), vec![0]);
}

#[rstest]
fn test_highest_altitude_starts_at_zero() {
    assert_eq!(highest_altitude(&[-5, 1, 5, 0, -7]), 1);
    assert_eq!(highest_altitude(&[-4, -3, -2]), 0);
}

#[rstest]
fn test_move_zeroes_is_stable() {
    let mut nums = vec![0, 1, 0, 3, 12];
    move_zeroes(&mut nums);
    assert_eq!(nums, vec![1, 3, 12, 0, 0]);

    let mut nums = vec![0];
    move_zeroes(&mut nums);
    assert_eq!(nums, vec![0]);
}

#[rstest]
fn test_pascal_triangle_rows() {
    assert_eq!(
        pascal_triangle(5),
        vec![
            vec![1],
            vec![1, 1],
            vec![1, 2, 1],
            vec![1, 3, 3, 1],
            vec![1, 4, 6, 4, 1],
        ]
    );
    assert_eq!(pascal_triangle(1), vec![vec![1]]);
    assert!(pascal_triangle(0).is_empty());
}

#[rstest]
fn test_goldilocks_number() {
    assert_eq!(goldilocks_number(&[3, 2, 1, 4]), Some(3));
    assert_eq!(goldilocks_number(&[1, 2]), None);
    assert_eq!(goldilocks_number(&[2, 1, 3]), Some(2));
}

#[rstest]
fn test_delete_minimums_yields_removal_order() {
    assert_eq!(delete_minimums(&[5, 3, 2, 4, 1]), vec![1, 2, 3, 4, 5]);
    assert_eq!(delete_minimums(&[5, 2, 1, 8, 2]), vec![1, 2, 2, 5, 8]);
}

#[rstest]
fn test_local_maximums_3x3_windows() {
    let grid = vec![
        vec![9, 9, 8, 1],
        vec![5, 6, 2, 6],
        vec![8, 2, 6, 4],
        vec![6, 2, 2, 2],
    ];
    assert_eq!(local_maximums(&grid), vec![vec![9, 9], vec![8, 6]]);
    assert!(local_maximums(&[vec![1, 2], vec![3, 4]]).is_empty());
}

//! Array and matrix warm-ups: scans, prefix sums, grid walks.

use itertools::Itertools;

/// Index of the first occurrence of `target`, scanning left to right.
pub fn linear_search(items: &[i64], target: i64) -> Option<usize> {
    items.iter().position(|&item| item == target)
}

/// Running sum: `answer[i]` is the sum of `nums[0..=i]`.
///
/// `[1, 2, 3, 4]` → `[1, 3, 6, 10]`
pub fn running_sum(nums: &[i64]) -> Vec<i64> {
    let mut sum = 0;
    nums.iter()
        .map(|&num| {
            sum += num;
            sum
        })
        .collect()
}

/// For each element, how many other elements are smaller than it.
///
/// `[8, 1, 2, 2, 3]` → `[4, 0, 1, 1, 3]`
pub fn smaller_than_current(nums: &[i64]) -> Vec<usize> {
    nums.iter()
        .map(|&num| nums.iter().filter(|&&other| other < num).count())
        .collect()
}

/// Sum of both diagonals of a square grid, center counted once.
pub fn diagonal_sum(grid: &[Vec<i64>]) -> i64 {
    let n = grid.len();
    let mut sum = 0;
    for (i, row) in grid.iter().enumerate() {
        sum += row[i];
        if n - 1 - i != i {
            sum += row[n - 1 - i];
        }
    }
    sum
}

/// Decrypt a circular "bomb code".
///
/// Each position is replaced by the sum of the next `k` elements (wrapping)
/// when `k > 0`, the previous `|k|` elements when `k < 0`, and zero when
/// `k == 0`.
///
/// `defuse(&[5, 7, 1, 4], 3)` → `[12, 10, 16, 13]`
pub fn defuse(code: &[i64], k: i64) -> Vec<i64> {
    let n = code.len() as i64;
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            if k > 0 {
                (1..=k).map(|d| code[((i + d) % n) as usize]).sum()
            } else if k < 0 {
                (1..=-k).map(|d| code[((i - d).rem_euclid(n)) as usize]).sum()
            } else {
                0
            }
        })
        .collect()
}

/// Can the array become non-decreasing by changing at most one element?
///
/// A second dip is immediately fatal. A single dip at `i` is repairable
/// when either `nums[i-1]` can be lowered (`nums[i+1] >= nums[i-1]`) or
/// `nums[i]` raised (`i < 2` or `nums[i-2] <= nums[i]` after treating the
/// dip as fixed).
pub fn non_decreasing(nums: &[i64]) -> bool {
    let mut fixed = false;
    for i in 1..nums.len() {
        if nums[i - 1] <= nums[i] {
            continue;
        }
        if fixed {
            return false;
        }
        fixed = true;
        if i >= 2 && nums[i - 2] > nums[i] && i + 1 < nums.len() && nums[i + 1] < nums[i - 1] {
            return false;
        }
    }
    true
}

/// Count pairs `(i, j)` where `pile1[i]` is divisible by `pile2[j] * k`.
pub fn good_pairs(pile1: &[i64], pile2: &[i64], k: i64) -> usize {
    pile1
        .iter()
        .cartesian_product(pile2.iter())
        .filter(|&(&a, &b)| b != 0 && k != 0 && a % (b * k) == 0)
        .count()
}

/// Customer with the maximum total wealth across their accounts.
///
/// Returns `(index, wealth)` of the first richest customer.
pub fn wealthiest_customer(accounts: &[Vec<i64>]) -> Option<(usize, i64)> {
    accounts
        .iter()
        .map(|account| account.iter().sum::<i64>())
        .enumerate()
        .max_by(|(i, a), (j, b)| a.cmp(b).then(j.cmp(i)))
}

/// For each index, the sum of elements to its left minus the sum to its right.
///
/// `[10, 4, 8, 3]` → `[-15, -1, 11, 22]`; `[1]` → `[0]`
pub fn left_right_difference(nums: &[i64]) -> Vec<i64> {
    let total: i64 = nums.iter().sum();
    let mut left = 0;
    nums.iter()
        .map(|&num| {
            let right = total - left - num;
            let diff = left - right;
            left += num;
            diff
        })
        .collect()
}

/// Highest altitude reached on a trip described by per-leg gains.
///
/// The trip starts at altitude 0, which is always a candidate.
pub fn highest_altitude(gain: &[i64]) -> i64 {
    let mut altitude = 0;
    let mut highest = 0;
    for &g in gain {
        altitude += g;
        highest = highest.max(altitude);
    }
    highest
}

/// Move all zeroes to the end in place, keeping the relative order of the
/// non-zero elements.
pub fn move_zeroes(nums: &mut [i64]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(write, read);
            write += 1;
        }
    }
}

/// First `num_rows` rows of Pascal's triangle.
///
/// Each row starts and ends with 1; interior entries follow the recurrence
/// `row[i][j] = row[i-1][j-1] + row[i-1][j]`.
///
/// `pascal_triangle(5)` →
/// `[[1], [1, 1], [1, 2, 1], [1, 3, 3, 1], [1, 4, 6, 4, 1]]`
pub fn pascal_triangle(num_rows: usize) -> Vec<Vec<u64>> {
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(num_rows);
    for i in 0..num_rows {
        let mut row = vec![1; i + 1];
        for j in 1..i {
            row[j] = triangle[i - 1][j - 1] + triangle[i - 1][j];
        }
        triangle.push(row);
    }
    triangle
}

/// First value that is neither the minimum nor the maximum of the slice.
pub fn goldilocks_number(nums: &[i64]) -> Option<i64> {
    let (min, max) = match nums.iter().minmax().into_option() {
        Some((&min, &max)) => (min, max),
        None => return None,
    };
    nums.iter().find(|&&num| num != min && num != max).copied()
}

/// Repeatedly remove the minimum element, returning removal order.
///
/// `[5, 3, 2, 4, 1]` → `[1, 2, 3, 4, 5]`; duplicates removed one at a time.
pub fn delete_minimums(nums: &[i64]) -> Vec<i64> {
    let mut sorted: Vec<i64> = nums.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Maximum value of every contiguous 3x3 submatrix of `grid`.
///
/// An `n x n` grid yields an `(n-2) x (n-2)` result; grids smaller than
/// 3x3 yield an empty result.
pub fn local_maximums(grid: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let n = grid.len();
    if n < 3 {
        return Vec::new();
    }
    (0..n - 2)
        .map(|r| {
            (0..n - 2)
                .map(|c| {
                    grid[r..r + 3]
                        .iter()
                        .flat_map(|row| &row[c..c + 3])
                        .copied()
                        .max()
                        .unwrap_or(i64::MIN)
                })
                .collect()
        })
        .collect()
}

//! Hash table patterns: complement search, frequency counting, grouping,
//! and sliding windows keyed on seen characters.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

/// Return indices of the two numbers that add up to `target`.
///
/// Single-pass complement search: for each element look up `target - num`
/// among previously seen values. O(n) time, O(n) space. The first valid
/// pair (lowest second index) wins.
///
/// # Examples
/// ```
/// use prepkit::topics::hashing::two_sum;
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
/// assert_eq!(two_sum(&[1, 2], 4), None);
/// ```
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &num) in nums.iter().enumerate() {
        let complement = target - num;
        if let Some(&j) = seen.get(&complement) {
            return Some((j, i));
        }
        seen.insert(num, i);
    }
    None
}

/// Quadratic reference version of [`two_sum`], kept for comparison.
pub fn two_sum_brute_force(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    for i in 0..nums.len() {
        for j in i + 1..nums.len() {
            if nums[i] + nums[j] == target {
                return Some((i, j));
            }
        }
    }
    None
}

/// All index pairs `(i, j)` with `i < j` whose values sum to `target`.
pub fn two_sum_all_pairs(nums: &[i64], target: i64) -> Vec<(usize, usize)> {
    let mut seen: HashMap<i64, Vec<usize>> = HashMap::new();
    let mut pairs = Vec::new();
    for (i, &num) in nums.iter().enumerate() {
        if let Some(prev) = seen.get(&(target - num)) {
            for &j in prev {
                pairs.push((j, i));
            }
        }
        seen.entry(num).or_default().push(i);
    }
    pairs
}

/// Like [`two_sum`] but returns the values instead of the indices.
pub fn two_sum_values(nums: &[i64], target: i64) -> Option<(i64, i64)> {
    let mut seen: HashSet<i64> = HashSet::new();
    for &num in nums {
        let complement = target - num;
        if seen.contains(&complement) {
            return Some((complement, num));
        }
        seen.insert(num);
    }
    None
}

/// Check whether `t` is an anagram of `s` via frequency counting.
///
/// Unicode-aware: counts characters, not bytes.
pub fn is_anagram(s: &str, t: &str) -> bool {
    if s.chars().count() != t.chars().count() {
        return false;
    }
    let mut count: HashMap<char, i64> = HashMap::new();
    for c in s.chars() {
        *count.entry(c).or_insert(0) += 1;
    }
    for c in t.chars() {
        let entry = count.entry(c).or_insert(0);
        *entry -= 1;
        if *entry == 0 {
            count.remove(&c);
        }
    }
    count.is_empty()
}

/// Character frequency table of `s`.
pub fn char_frequency(s: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Check whether the slice contains any value twice. Early termination.
pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen = HashSet::new();
    nums.iter().any(|&num| !seen.insert(num))
}

/// First value that occurs a second time, in scan order.
pub fn find_duplicate(nums: &[i64]) -> Option<i64> {
    let mut seen = HashSet::new();
    for &num in nums {
        if !seen.insert(num) {
            return Some(num);
        }
    }
    None
}

/// Group words that are anagrams of each other.
///
/// Buckets on the sorted-character key; groups preserve input order within
/// a bucket, bucket order follows first appearance.
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for word in words {
        let key: String = word.chars().sorted().collect();
        let bucket = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        bucket.push((*word).to_string());
    }
    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .collect()
}

/// Length of the longest substring without repeating characters.
///
/// Sliding window over a char vector; the left edge advances past the
/// previous occurrence whenever a duplicate enters the window.
pub fn longest_unique_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut window: HashSet<char> = HashSet::new();
    let mut left = 0;
    let mut best = 0;
    for right in 0..chars.len() {
        while window.contains(&chars[right]) {
            window.remove(&chars[left]);
            left += 1;
        }
        window.insert(chars[right]);
        best = best.max(right - left + 1);
    }
    best
}

/// Length of the longest substring with at most `k` distinct characters.
pub fn longest_substring_k_distinct(s: &str, k: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut left = 0;
    let mut best = 0;
    for right in 0..chars.len() {
        *counts.entry(chars[right]).or_insert(0) += 1;
        while counts.len() > k {
            if let Some(count) = counts.get_mut(&chars[left]) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&chars[left]);
                }
            }
            left += 1;
        }
        best = best.max(right + 1 - left);
    }
    best
}

/// Number of contiguous subarrays summing to exactly `k`.
///
/// Prefix-sum counting: a subarray ending at `i` sums to `k` iff a prefix
/// with sum `prefix - k` was seen before. The seed entry `{0: 1}` covers
/// subarrays starting at index 0.
pub fn subarray_sum_equals_k(nums: &[i64], k: i64) -> usize {
    let mut sum_count: HashMap<i64, usize> = HashMap::from([(0, 1)]);
    let mut prefix = 0;
    let mut total = 0;
    for &num in nums {
        prefix += num;
        if let Some(&count) = sum_count.get(&(prefix - k)) {
            total += count;
        }
        *sum_count.entry(prefix).or_insert(0) += 1;
    }
    total
}

//! Stack and queue patterns: bracket matching, monotonic stacks, and
//! round-robin queue simulations.

use std::collections::VecDeque;

/// Check that every `()`, `[]`, `{}` pair opens and closes in order.
///
/// # Examples
/// ```
/// use prepkit::topics::stacks::is_balanced;
/// assert!(is_balanced("()[]{}"));
/// assert!(!is_balanced("(]"));
/// ```
pub fn is_balanced(text: &str) -> bool {
    let mut expected_closers = Vec::new();
    for c in text.chars() {
        match c {
            '(' => expected_closers.push(')'),
            '[' => expected_closers.push(']'),
            '{' => expected_closers.push('}'),
            ')' | ']' | '}' => {
                if expected_closers.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }
    expected_closers.is_empty()
}

/// Remove adjacent duplicate pairs until none remain.
///
/// `"abbaca"` → `"ca"` (the `bb` cancels, exposing `aa` which also cancels)
pub fn remove_adjacent_pairs(text: &str) -> String {
    let mut stack: Vec<char> = Vec::new();
    for c in text.chars() {
        if stack.last() == Some(&c) {
            stack.pop();
        } else {
            stack.push(c);
        }
    }
    stack.into_iter().collect()
}

/// For each value in `query`, the first greater value to its right in `pool`.
///
/// Monotonic decreasing stack over `pool`; values are assumed distinct
/// within `pool` so positions can be recovered by value.
///
/// `query = [4, 1, 2]`, `pool = [1, 3, 4, 2]` → `[None, Some(3), None]`
pub fn next_greater_elements(query: &[i64], pool: &[i64]) -> Vec<Option<i64>> {
    let mut next_greater = std::collections::HashMap::new();
    let mut stack: Vec<i64> = Vec::new();
    for &value in pool {
        while stack.last().is_some_and(|&top| top < value) {
            if let Some(top) = stack.pop() {
                next_greater.insert(top, value);
            }
        }
        stack.push(value);
    }
    query
        .iter()
        .map(|value| next_greater.get(value).copied())
        .collect()
}

/// Final prices after applying the "next smaller or equal" discount.
///
/// Each item is discounted by the first later price that does not exceed
/// it. `[8, 4, 6, 2, 3]` → `[4, 2, 4, 2, 3]`
pub fn final_discounted_costs(costs: &[i64]) -> Vec<i64> {
    let mut result = costs.to_vec();
    let mut stack: Vec<usize> = Vec::new();
    for (i, &cost) in costs.iter().enumerate() {
        while stack.last().is_some_and(|&top| costs[top] >= cost) {
            if let Some(top) = stack.pop() {
                result[top] -= cost;
            }
        }
        stack.push(i);
    }
    result
}

/// Reverse a queue using an intermediate stack.
pub fn reverse_queue<T>(items: VecDeque<T>) -> VecDeque<T> {
    let mut stack: Vec<T> = items.into_iter().collect();
    let mut reversed = VecDeque::with_capacity(stack.len());
    while let Some(item) = stack.pop() {
        reversed.push_back(item);
    }
    reversed
}

/// Interleave the first half of a queue with the second half.
///
/// `[1, 2, 3, 4, 5, 6]` → `[1, 4, 2, 5, 3, 6]`; for odd lengths the extra
/// element stays in the first half.
pub fn interleave_queue<T>(mut items: VecDeque<T>) -> VecDeque<T> {
    let half = items.len().div_ceil(2);
    let mut second: VecDeque<T> = items.split_off(half);
    let mut interleaved = VecDeque::with_capacity(items.len() + second.len());
    loop {
        match (items.pop_front(), second.pop_front()) {
            (None, None) => break,
            (first, back) => {
                interleaved.extend(first);
                interleaved.extend(back);
            }
        }
    }
    interleaved
}

/// Seconds until the person at position `k` has bought all their tickets.
///
/// One ticket is sold per second; buyers rejoin the back of the queue until
/// satisfied. `([2, 3, 2], 2)` → `6`
pub fn time_to_finish(tickets: &[u64], k: usize) -> u64 {
    let mut queue: VecDeque<(usize, u64)> = tickets.iter().copied().enumerate().collect();
    let mut seconds = 0;
    while let Some((position, remaining)) = queue.pop_front() {
        seconds += 1;
        if remaining == 1 {
            if position == k {
                return seconds;
            }
        } else {
            queue.push_back((position, remaining - 1));
        }
    }
    seconds
}

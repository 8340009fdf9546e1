//! Recursion drills: structural recursion over slices and strings, a
//! bottom-up perfect-squares counter, and a recursive evaluator for nested
//! ternary expressions.

use std::collections::HashSet;

use super::{TopicError, TopicResult};

/// Count elements recursively (no `len`).
pub fn count_recursive<T>(items: &[T]) -> usize {
    match items.split_first() {
        None => 0,
        Some((_, rest)) => 1 + count_recursive(rest),
    }
}

/// Sum elements recursively.
///
/// `[5, 10, 15, 20, 25, 30]` → `105`
pub fn sum_recursive(nums: &[i64]) -> i64 {
    match nums.split_first() {
        None => 0,
        Some((&first, rest)) => first + sum_recursive(rest),
    }
}

/// Count distinct elements recursively.
///
/// `["Mark I", "Mark I", "Mark III"]` → `2`
pub fn count_unique_recursive(items: &[&str]) -> usize {
    fn go<'a>(items: &[&'a str], seen: &mut HashSet<&'a str>) -> usize {
        match items.split_first() {
            None => 0,
            Some((&first, rest)) => {
                let new = usize::from(seen.insert(first));
                new + go(rest, seen)
            }
        }
    }
    go(items, &mut HashSet::new())
}

/// Naive recursive Fibonacci: F(0)=0, F(1)=1.
///
/// `fibonacci(8)` → `21`
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// 4 raised to the `n`th power, recursively; negative exponents give the
/// reciprocal.
///
/// `power_of_four(2)` → `16.0`; `power_of_four(-2)` → `0.0625`
pub fn power_of_four(n: i32) -> f64 {
    if n < 0 {
        1.0 / power_of_four(-n)
    } else if n == 0 {
        1.0
    } else {
        4.0 * power_of_four(n - 1)
    }
}

/// Maximum element, recursively (no `max` over the whole slice).
pub fn max_recursive(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    Some(match max_recursive(rest) {
        Some(rest_max) if rest_max > first => rest_max,
        _ => first,
    })
}

/// Count occurrences of `target` in `text`, recursively.
///
/// `count_char("VXVYGA", 'V')` → `2`
pub fn count_char(text: &str, target: char) -> usize {
    let mut chars = text.chars();
    match chars.next() {
        None => 0,
        Some(c) => usize::from(c == target) + count_char(chars.as_str(), target),
    }
}

/// Minimum number of perfect squares summing to `n`.
///
/// Bottom-up dynamic programming: `dp[i]` is the best count for `i`, built
/// by trying every square `j*j <= i`. Every positive `i` is reachable via
/// `j = 1`, so the table never holds an unreachable entry past index 0.
///
/// `num_squares(12)` → `3` (4 + 4 + 4); `num_squares(13)` → `2` (4 + 9)
pub fn num_squares(n: u32) -> u32 {
    let n = n as usize;
    let mut dp = vec![u32::MAX; n + 1];
    dp[0] = 0;
    for i in 1..=n {
        let mut j = 1;
        while j * j <= i {
            dp[i] = dp[i].min(dp[i - j * j] + 1);
            j += 1;
        }
    }
    dp[n]
}

/// Evaluate a nested ternary expression over single characters.
///
/// The grammar is `expr := atom | atom '?' expr ':' expr` where an atom is
/// a digit, `T` (true) or `F` (false). Conditions group right-to-left, so
/// the natural left-to-right recursive descent handles nesting directly.
///
/// # Examples
/// ```
/// use prepkit::topics::recursion::eval_ternary;
/// assert_eq!(eval_ternary("T?2:3"), Ok('2'));
/// assert_eq!(eval_ternary("F?1:T?4:5"), Ok('4'));
/// assert_eq!(eval_ternary("T?T?F:5:3"), Ok('F'));
/// ```
///
/// # Errors
/// Returns [`TopicError::InvalidTernary`] for truncated expressions,
/// unexpected characters, or trailing input.
pub fn eval_ternary(expr: &str) -> TopicResult<char> {
    let chars: Vec<char> = expr.chars().collect();
    let mut pos = 0;
    let value = eval_at(&chars, &mut pos)?;
    if pos != chars.len() {
        return Err(TopicError::InvalidTernary {
            pos,
            reason: "trailing input after complete expression".into(),
        });
    }
    Ok(value)
}

fn eval_at(chars: &[char], pos: &mut usize) -> TopicResult<char> {
    let atom = match chars.get(*pos) {
        Some(&c) if c.is_ascii_digit() || c == 'T' || c == 'F' => c,
        Some(&c) => {
            return Err(TopicError::InvalidTernary {
                pos: *pos,
                reason: format!("expected digit, 'T' or 'F', found {c:?}"),
            })
        }
        None => {
            return Err(TopicError::InvalidTernary {
                pos: *pos,
                reason: "unexpected end of expression".into(),
            })
        }
    };
    *pos += 1;

    if chars.get(*pos) != Some(&'?') {
        return Ok(atom);
    }
    *pos += 1;

    let when_true = eval_at(chars, pos)?;
    if chars.get(*pos) != Some(&':') {
        return Err(TopicError::InvalidTernary {
            pos: *pos,
            reason: "expected ':'".into(),
        });
    }
    *pos += 1;
    let when_false = eval_at(chars, pos)?;

    Ok(if atom == 'T' { when_true } else { when_false })
}

/// Stack-based evaluator for the same grammar as [`eval_ternary`].
///
/// Scans right to left, collapsing `cond ? a : b` whenever a condition
/// lands on top of a pending `?`.
pub fn eval_ternary_iterative(expr: &str) -> TopicResult<char> {
    let chars: Vec<char> = expr.chars().collect();
    let mut stack: Vec<char> = Vec::new();

    for (i, &c) in chars.iter().enumerate().rev() {
        if !(c.is_ascii_digit() || c == 'T' || c == 'F' || c == '?' || c == ':') {
            return Err(TopicError::InvalidTernary {
                pos: i,
                reason: format!("expected digit, 'T' or 'F', found {c:?}"),
            });
        }
        if stack.last() == Some(&'?') && c != '?' && c != ':' {
            stack.pop();
            let (when_true, colon, when_false) = match (stack.pop(), stack.pop(), stack.pop()) {
                (Some(t), Some(colon), Some(f)) => (t, colon, f),
                _ => {
                    return Err(TopicError::InvalidTernary {
                        pos: i,
                        reason: "truncated ternary branch".into(),
                    })
                }
            };
            if colon != ':' {
                return Err(TopicError::InvalidTernary {
                    pos: i,
                    reason: "expected ':'".into(),
                });
            }
            stack.push(if c == 'T' { when_true } else { when_false });
        } else {
            stack.push(c);
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) if value != '?' && value != ':' => Ok(value),
        _ => Err(TopicError::InvalidTernary {
            pos: 0,
            reason: "expression did not reduce to a single value".into(),
        }),
    }
}

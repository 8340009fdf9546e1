//! String manipulation: word games, two-pointer swaps, digit arithmetic.

/// Reverse the words of a sentence, normalizing interior whitespace.
///
/// `"tubby little cubby all stuffed with fluff"` →
/// `"fluff with stuffed all cubby little tubby"`
pub fn reverse_words(sentence: &str) -> String {
    sentence.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Check whether `s` is the acronym formed by the first character of each word.
pub fn is_acronym(words: &[&str], s: &str) -> bool {
    let acronym: String = words.iter().filter_map(|word| word.chars().next()).collect();
    acronym == s
}

/// Merge two words by alternating characters, appending the tail of the
/// longer word.
///
/// `("abc", "pqr")` → `"apbqcr"`; `("ab", "pqrs")` → `"apbqrs"`
pub fn merge_alternately(a: &str, b: &str) -> String {
    let mut merged = String::with_capacity(a.len() + b.len());
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => {
                merged.push(x);
                merged.push(y);
            }
            (Some(x), None) => {
                merged.push(x);
                merged.extend(left.by_ref());
                break;
            }
            (None, Some(y)) => {
                merged.push(y);
                merged.extend(right.by_ref());
                break;
            }
            (None, None) => break,
        }
    }
    merged
}

/// Reverse only the vowels of a string, two pointers from both ends.
///
/// `"IceCreAm"` → `"AceCreIm"`
pub fn reverse_vowels(s: &str) -> String {
    const VOWELS: &str = "aeiouAEIOU";
    let mut chars: Vec<char> = s.chars().collect();
    let (mut i, mut j) = (0, chars.len());
    while i < j {
        if !VOWELS.contains(chars[i]) {
            i += 1;
        } else if !VOWELS.contains(chars[j - 1]) {
            j -= 1;
        } else {
            chars.swap(i, j - 1);
            i += 1;
            j -= 1;
        }
    }
    chars.into_iter().collect()
}

/// Number of digits of `n`, ignoring the sign. Zero has one digit.
pub fn count_digits(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    if n == 0 {
        return 1;
    }
    let mut count = 0;
    while n > 0 {
        n /= 10;
        count += 1;
    }
    count
}

/// Sum of the decimal digits of `n` (sign ignored).
///
/// `423` → `9`
pub fn sum_of_digits(n: i64) -> u64 {
    let mut n = n.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Apply increment/decrement operations to a counter starting at 1.
///
/// `"bouncy"` and `"flouncy"` add one, `"trouncy"` and `"pouncy"` subtract
/// one, anything else is ignored.
pub fn final_value_after_operations(operations: &[&str]) -> i64 {
    operations.iter().fold(1, |value, &op| match op {
        "bouncy" | "flouncy" => value + 1,
        "trouncy" | "pouncy" => value - 1,
        _ => value,
    })
}

use rstest::rstest;

use prepkit::topics::strings::{
    count_digits, final_value_after_operations, is_acronym, merge_alternately, reverse_vowels,
    reverse_words, sum_of_digits,
};

#[rstest]
#[case("tubby little cubby all stuffed with fluff", "fluff with stuffed all cubby little tubby")]
#[case("Pooh", "Pooh")]
#[case("", "")]
#[case("  double  spaced  ", "spaced double")]
fn test_reverse_words(#[case] sentence: &str, #[case] expected: &str) {
    assert_eq!(reverse_words(sentence), expected);
}

#[rstest]
#[case(&["alice", "bob", "charlie"], "abc", true)]
#[case(&["an", "apple"], "a", false)]
#[case(&[], "", true)]
fn test_is_acronym(#[case] words: &[&str], #[case] s: &str, #[case] expected: bool) {
    assert_eq!(is_acronym(words, s), expected);
}

#[rstest]
#[case("abc", "pqr", "apbqcr")]
#[case("ab", "pqrs", "apbqrs")]
#[case("abcd", "pq", "apbqcd")]
#[case("", "xyz", "xyz")]
fn test_merge_alternately(#[case] a: &str, #[case] b: &str, #[case] expected: &str) {
    assert_eq!(merge_alternately(a, b), expected);
}

#[rstest]
#[case("hello", "holle")]
#[case("IceCreAm", "AceCreIm")]
#[case("xyz", "xyz")]
fn test_reverse_vowels(#[case] s: &str, #[case] expected: &str) {
    assert_eq!(reverse_vowels(s), expected);
}

#[rstest]
#[case(0, 1)]
#[case(423, 3)]
#[case(-1005, 4)]
fn test_count_digits(#[case] n: i64, #[case] expected: u32) {
    assert_eq!(count_digits(n), expected);
}

#[rstest]
#[case(423, 9)]
#[case(4, 4)]
#[case(-31, 4)]
fn test_sum_of_digits(#[case] n: i64, #[case] expected: u64) {
    assert_eq!(sum_of_digits(n), expected);
}

#[rstest]
fn test_final_value_after_operations_starts_at_one() {
    assert_eq!(final_value_after_operations(&["trouncy", "flouncy", "flouncy"]), 2);
    assert_eq!(final_value_after_operations(&["bouncy", "bouncy", "flouncy"]), 4);
    assert_eq!(final_value_after_operations(&[]), 1);
}

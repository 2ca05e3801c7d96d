//! ASCII vowel classification.
//!
//! Only `a e i o u` in either case count. There is deliberately no Unicode
//! folding: `é` and `ü` are letters but not vowels here.

use crate::contracts::check_vowel_count_matches_bytes;

/// The recognized vowels, lowercase.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Is `c` one of `a e i o u`, ignoring ASCII case?
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Number of vowel characters in `text`.
///
/// ```
/// assert_eq!(sequtil::count_vowels("Australia"), 5);
/// assert_eq!(sequtil::count_vowels(""), 0);
/// ```
pub fn count_vowels(text: &str) -> usize {
    let count = text.chars().filter(|&c| is_vowel(c)).count();
    check_vowel_count_matches_bytes(text, count);
    count
}

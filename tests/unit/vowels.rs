//! Vowel counting examples.

use super::common::VOWEL_CASES;
use sequtil::{count_vowels, is_vowel, VOWELS};

#[test]
fn worked_examples() {
    for &(text, expected) in VOWEL_CASES {
        assert_eq!(count_vowels(text), expected, "{:?}", text);
    }
}

#[test]
fn every_character_is_visited_once() {
    assert_eq!(count_vowels("aaaa"), 4);
    assert_eq!(count_vowels("a a a"), 3);
}

#[test]
fn multibyte_text_is_handled_per_character() {
    assert_eq!(count_vowels("naïve résumé"), 3);
    assert_eq!(count_vowels("తెలుగు"), 0);
    assert_eq!(count_vowels("🦀 ferris 🦀"), 2);
}

#[test]
fn vowel_set_is_exactly_five_letters() {
    assert_eq!(VOWELS, ['a', 'e', 'i', 'o', 'u']);
    let classified: String = ('a'..='z').filter(|&c| is_vowel(c)).collect();
    assert_eq!(classified, "aeiou");
    let upper: String = ('A'..='Z').filter(|&c| is_vowel(c)).collect();
    assert_eq!(upper, "AEIOU");
}

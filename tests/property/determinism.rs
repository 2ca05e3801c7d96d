//! Purity: identical input, identical output, input untouched.

use proptest::prelude::*;
use sequtil::{aggregate, count_vowels, is_even, square_all, take_first};

proptest! {
    #[test]
    fn prop_every_operation_is_deterministic(
        seq in prop::collection::vec(-1_000i64..1_000, 1..32),
        text in "\\PC{0,32}",
        n in -4i64..40,
    ) {
        let before = seq.clone();

        prop_assert_eq!(take_first(&seq, n), take_first(&seq, n));
        prop_assert_eq!(count_vowels(&text), count_vowels(&text));
        prop_assert_eq!(aggregate(&seq), aggregate(&seq));
        for &x in &seq {
            prop_assert_eq!(is_even(x), is_even(x));
        }

        prop_assert_eq!(&seq, &before);
    }

    /// Squaring twice differs from squaring once unless every element is 0 or ±1.
    #[test]
    fn prop_squaring_is_not_idempotent(seq in prop::collection::vec(-1_000i64..1_000, 1..16)) {
        let once = square_all(&seq).unwrap();
        let twice = square_all(&once).unwrap();
        let only_fixed_points = once.iter().all(|&x| x == 0 || x == 1);
        prop_assert_eq!(once == twice, only_fixed_points);
    }
}

//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It holds the canonical worked examples so every test suite checks the
//! same inputs against the same expected outputs.

#![doc(hidden)]

/// Prefix examples: `(input, n, expected)`. `None` means the default bound.
pub const PREFIX_CASES: &[(&[i32], Option<i64>, &[i32])] = &[
    (&[7, 9, 0, -2], Some(3), &[7, 9, 0]),
    (&[1, 2, 3], Some(5), &[1, 2, 3]),
    (&[5, 4, 3, 2, 1], None, &[5]),
    (&[7, 9, 0, -2], Some(-3), &[]),
    (&[], Some(2), &[]),
];

/// Vowel examples: `(text, expected count)`.
pub const VOWEL_CASES: &[(&str, usize)] = &[
    ("Australia", 5),
    ("", 0),
    ("AEIOU", 5),
    ("rhythm", 0),
    ("Hello, World!", 3),
];

/// Parity examples: `(n, expected is_even)`.
pub const PARITY_CASES: &[(i64, bool)] = &[(4, true), (7, false), (0, true), (-2, true), (-7, false)];

/// The odd numbers below ten, the canonical aggregate input.
pub const ODDS: [i64; 5] = [1, 3, 5, 7, 9];

/// Squares of `ODDS`.
pub const ODDS_SQUARED: [i64; 5] = [1, 9, 25, 49, 81];

/// Sum of `ODDS`.
pub const ODDS_SUM: i64 = 25;

/// Average of `ODDS`.
pub const ODDS_AVERAGE: f64 = 5.0;

/// Resolve an optional prefix bound the way the public API does.
pub fn prefix_bound(n: Option<i64>) -> i64 {
    n.unwrap_or(crate::prefix::DEFAULT_TAKE)
}

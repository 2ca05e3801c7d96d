// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the sequence operations.
//!
//! Debug-mode assertions that the operations call on their own output.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State each operation's postcondition in one place
//!
//! # Contracts
//!
//! | Contract Function                 | Postcondition                                  |
//! |-----------------------------------|------------------------------------------------|
//! | `check_prefix`                    | `len(out) = clamp(n, 0, len(in))`, same start  |
//! | `check_vowel_count_matches_bytes` | `count = ASCII vowel bytes in text`            |
//! | `check_squares_aligned`           | `len(squares) = len(in)`                       |
//! | `check_average_bounded`           | `min ≤ average ≤ max`                          |
//!
//! # Usage
//!
//! ```ignore
//! use sequtil::contracts::*;
//!
//! // In debug builds, this panics if the postcondition is violated
//! check_prefix(input, output, n);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// PREFIX CONTRACTS
// ============================================================================

/// Check that `output` is the length-`clamp(n)` head of `input`.
///
/// The expected length is derived by widening both sides to `i128` rather
/// than by the `usize` conversion `take_first` uses. The output must borrow
/// from the start of the input; pointer equality is enough to show positional
/// equality without requiring `T: PartialEq`.
///
/// # Panics (debug builds only)
/// Panics if the length is wrong or the output does not start at the input.
#[inline]
pub fn check_prefix<T>(input: &[T], output: &[T], n: i64) {
    let expected = i128::from(n).clamp(0, input.len() as i128);

    debug_assert_eq!(
        output.len() as i128,
        expected,
        "Contract violation: Prefix.Length - len(out) {} != clamp({}, 0, {}) = {}",
        output.len(),
        n,
        input.len(),
        expected
    );

    debug_assert!(
        std::ptr::eq(output.as_ptr(), input.as_ptr()),
        "Contract violation: Prefix.SameStart - output does not begin at input[0]"
    );
}

// ============================================================================
// VOWEL CONTRACTS
// ============================================================================

/// Check a vowel count against a byte-level recount.
///
/// ASCII vowels are single bytes in UTF-8 and never occur inside a multi-byte
/// sequence, so counting matching bytes must agree with counting `char`s.
///
/// # Panics (debug builds only)
/// Panics if `count` differs from the number of ASCII vowel bytes in `text`.
#[inline]
pub fn check_vowel_count_matches_bytes(text: &str, count: usize) {
    debug_assert_eq!(
        count,
        text.bytes()
            .filter(|b| matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u'))
            .count(),
        "Contract violation: Vowels.ByteRecount - char-level count disagrees with bytes in {:?}",
        text.chars().take(40).collect::<String>()
    );
}

// ============================================================================
// AGGREGATE CONTRACTS
// ============================================================================

/// Check that `square_all` preserved the length.
#[inline]
pub fn check_squares_aligned(input_len: usize, output_len: usize) {
    debug_assert_eq!(
        input_len, output_len,
        "Contract violation: Squares.Aligned - len(in) {} != len(out) {}",
        input_len, output_len
    );
}

/// Check that an average lies between the minimum and maximum element.
///
/// Summation rounding can push a float average a few ULPs past the bounds,
/// so the comparison uses a relative tolerance. Non-finite inputs are skipped:
/// there is no meaningful bound once NaN or infinity is involved.
///
/// # Panics (debug builds only)
/// Panics if `average` is outside `[min, max]` beyond the tolerance.
#[inline]
pub fn check_average_bounded(min: f64, max: f64, average: f64) {
    if !(min.is_finite() && max.is_finite() && average.is_finite()) {
        return;
    }

    let tolerance = 1e-9 * (1.0 + min.abs().max(max.abs()));

    debug_assert!(
        average >= min - tolerance && average <= max + tolerance,
        "Contract violation: Average.Bounded - {} not in [{}, {}]",
        average,
        min,
        max
    );
}

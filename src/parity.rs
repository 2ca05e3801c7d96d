// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parity for integers, and a checked variant for floats.
//!
//! Integer parity uses the type's own `%`, which keeps the sign of the
//! dividend: `-3 % 2 == -1`. Comparing the remainder against zero (rather
//! than against one) is what makes negative numbers classify correctly.
//!
//! Parity is only defined for integers. A float is accepted when it holds an
//! integral value; anything else is rejected with `ParityError`.

use crate::error::ParityError;

/// Even/odd classification.
pub trait Parity {
    /// `self % 2 == 0`.
    fn is_even(&self) -> bool;

    /// Negation of `is_even`.
    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

macro_rules! impl_parity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Parity for $t {
                #[inline]
                fn is_even(&self) -> bool {
                    *self % 2 == 0
                }
            }
        )*
    };
}

impl_parity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Is `n` divisible by two?
///
/// ```
/// use sequtil::is_even;
///
/// assert!(is_even(4));
/// assert!(!is_even(7));
/// assert!(is_even(0));
/// assert!(is_even(-2));
/// ```
#[inline]
pub fn is_even<T: Parity>(n: T) -> bool {
    n.is_even()
}

/// Parity of a float holding an integral value.
pub fn is_even_f64(x: f64) -> Result<bool, ParityError> {
    if !x.is_finite() {
        tracing::debug!(x, "parity requested for non-finite value");
        return Err(ParityError::NotFinite(x));
    }
    if x.fract() != 0.0 {
        tracing::debug!(x, "parity requested for non-integer value");
        return Err(ParityError::NotAnInteger(x));
    }
    // `%` on floats is also sign-preserving; -0.0 and 0.0 both compare equal to zero.
    Ok(x % 2.0 == 0.0)
}

/// Negation of `is_even_f64`, with the same rejections.
pub fn is_odd_f64(x: f64) -> Result<bool, ParityError> {
    is_even_f64(x).map(|even| !even)
}

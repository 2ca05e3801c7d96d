// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the operations that have real preconditions.
//!
//! Most of this crate never fails: an out-of-range `n` or a non-sequence input
//! degrades to an empty result. The two places that do fail are listed here.
//!
//! | Error            | Raised by                                   |
//! |------------------|---------------------------------------------|
//! | `AggregateError` | `sum`, `square_all`, `average`, `NonEmpty`  |
//! | `ParityError`    | `is_even_f64`, `is_odd_f64`                 |

use thiserror::Error;

/// Precondition violations for the aggregate operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// The sequence was empty. `sum` has no seed element and `average`
    /// would divide by zero, so both fail fast instead of inventing a value.
    #[error("aggregate requires a non-empty sequence")]
    EmptyInput,
    /// Integer arithmetic overflowed while processing element `index`.
    #[error("arithmetic overflow at element {index}")]
    Overflow { index: usize },
}

/// Rejection reasons for parity checks on floating-point input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParityError {
    /// NaN or an infinity.
    #[error("parity is undefined for non-finite value {0}")]
    NotFinite(f64),
    /// A finite value with a fractional part.
    #[error("parity is undefined for non-integer value {0}")]
    NotAnInteger(f64),
}

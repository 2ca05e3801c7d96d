// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small sequence utilities with exact edge-case contracts.
//!
//! Four independent, pure operations. None of them mutates its input, none
//! keeps state between calls, and calling any of them twice with the same
//! input gives the same output.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐
//! │  prefix.rs  │  │  vowels.rs  │  │  parity.rs  │  │ aggregate.rs │
//! │ (take_first)│  │(count_vowels│  │  (is_even)  │  │ (sum, square │
//! │             │  │  is_vowel)  │  │             │  │  _all, avg)  │
//! └─────────────┘  └─────────────┘  └─────────────┘  └──────────────┘
//!        │                │                                  │
//!        ▼                ▼                                  ▼
//! ┌────────────────────────────────────┐      ┌──────────────────────┐
//! │            contracts.rs            │      │     verified.rs      │
//! │ (debug-build postcondition checks) │      │ (NonEmpty: no empty  │
//! └────────────────────────────────────┘      │  aggregate inputs)   │
//!                                             └──────────────────────┘
//! ```
//!
//! # Failure model
//!
//! | Input                             | Result                        |
//! |-----------------------------------|-------------------------------|
//! | `take_first` with `n <= 0`        | empty prefix                  |
//! | `take_first_value` on non-array   | empty vector                  |
//! | `sum` / `average` on empty input  | `AggregateError::EmptyInput`  |
//! | integer overflow in aggregates    | `AggregateError::Overflow`    |
//! | `is_even_f64` on `2.5` or NaN     | `ParityError`                 |
//!
//! # Usage
//!
//! ```
//! use sequtil::{aggregate, count_vowels, is_even, take_first};
//!
//! assert_eq!(take_first(&[7, 9, 0, -2], 3), &[7, 9, 0]);
//! assert_eq!(count_vowels("Australia"), 5);
//! assert!(is_even(-2));
//!
//! let agg = aggregate(&[1, 3, 5, 7, 9])?;
//! assert_eq!(agg.sum, 25);
//! assert_eq!(agg.squares, vec![1, 9, 25, 49, 81]);
//! assert_eq!(agg.average, 5.0);
//! # Ok::<(), sequtil::AggregateError>(())
//! ```

// Module declarations
mod aggregate;
pub mod contracts;
mod error;
mod parity;
mod prefix;
pub mod testing;
mod types;
pub mod verified;
mod vowels;

// Re-exports for public API
pub use aggregate::{aggregate, average, square_all, sum};
pub use error::{AggregateError, ParityError};
pub use parity::{is_even, is_even_f64, is_odd_f64, Parity};
#[cfg(feature = "json")]
pub use prefix::take_first_value;
pub use prefix::{take_first, take_first_default, DEFAULT_TAKE};
pub use types::{Aggregation, Numeric};
pub use verified::NonEmpty;
pub use vowels::{count_vowels, is_vowel, VOWELS};

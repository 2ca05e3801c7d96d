// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sum, elementwise square, and average over a numeric sequence.
//!
//! `sum` is a left fold seeded with the first element, so there is no value
//! to return for an empty sequence. Both `sum` and `average` fail fast with
//! `AggregateError::EmptyInput` rather than inventing a zero. `square_all` is
//! well defined on empty input and returns an empty vector.
//!
//! Integer elements use checked arithmetic: overflow is an error naming the
//! element where it happened, never a silent wrap.

use crate::contracts::{check_average_bounded, check_squares_aligned};
use crate::error::AggregateError;
use crate::types::{Aggregation, Numeric};

/// Left-fold sum of a non-empty sequence.
///
/// ```
/// assert_eq!(sequtil::sum(&[1, 3, 5, 7, 9]), Ok(25));
/// assert!(sequtil::sum::<i32>(&[]).is_err());
/// ```
pub fn sum<T: Numeric>(sequence: &[T]) -> Result<T, AggregateError> {
    let (&first, rest) = sequence.split_first().ok_or_else(|| {
        tracing::debug!("sum of empty sequence");
        AggregateError::EmptyInput
    })?;

    rest.iter()
        .enumerate()
        .try_fold(first, |acc, (i, &value)| {
            acc.checked_add(value)
                .ok_or(AggregateError::Overflow { index: i + 1 })
        })
        .inspect_err(|err| tracing::debug!(%err, "sum failed"))
}

/// Each element squared, same length and order as the input.
pub fn square_all<T: Numeric>(sequence: &[T]) -> Result<Vec<T>, AggregateError> {
    let squares = sequence
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            value
                .checked_mul(value)
                .ok_or(AggregateError::Overflow { index })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| tracing::debug!(%err, "square_all failed"))?;

    check_squares_aligned(sequence.len(), squares.len());
    Ok(squares)
}

/// `sum / len` with floating-point division.
pub fn average<T: Numeric>(sequence: &[T]) -> Result<f64, AggregateError> {
    let total = sum(sequence)?;
    Ok(mean_of(sequence, total))
}

/// Sum, squares and average in one call.
///
/// Fails with the first error any of the three would raise: `EmptyInput`
/// before any overflow, and a sum overflow before a square overflow.
pub fn aggregate<T: Numeric>(sequence: &[T]) -> Result<Aggregation<T>, AggregateError> {
    let total = sum(sequence)?;
    let squares = square_all(sequence)?;
    let average = mean_of(sequence, total);

    tracing::trace!(len = sequence.len(), average, "aggregated sequence");

    Ok(Aggregation {
        len: sequence.len(),
        sum: total,
        squares,
        average,
    })
}

/// Average from an already-computed sum. `sequence` must be non-empty.
fn mean_of<T: Numeric>(sequence: &[T], total: T) -> f64 {
    let mean = total.to_f64() / sequence.len() as f64;

    if cfg!(debug_assertions) {
        let (min, max) = bounds(sequence);
        check_average_bounded(min, max, mean);
    }

    mean
}

/// Smallest and largest element as `f64`.
fn bounds<T: Numeric>(sequence: &[T]) -> (f64, f64) {
    sequence
        .iter()
        .map(|value| value.to_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

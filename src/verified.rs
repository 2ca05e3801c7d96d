// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A sequence wrapper that makes the empty case unrepresentable.
//!
//! `sum` and `average` have to check for an empty slice on every call. Wrap
//! the data in `NonEmpty` once and the check is paid at construction; the
//! only error left for the aggregate methods is integer overflow.
//!
//! # Example
//!
//! ```
//! use sequtil::NonEmpty;
//!
//! let odds = NonEmpty::new(vec![1, 3, 5, 7, 9])?;
//! assert_eq!(*odds.first(), 1);
//! assert_eq!(odds.average()?, 5.0);
//! # Ok::<(), sequtil::AggregateError>(())
//! ```

use crate::aggregate::{aggregate, average, square_all, sum};
use crate::error::AggregateError;
use crate::types::{Aggregation, Numeric};
use serde::{Deserialize, Serialize};

/// An owned sequence with at least one element.
///
/// Deserialization goes through `Vec<T>` and re-runs the emptiness check,
/// so an empty JSON array is rejected rather than producing an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct NonEmpty<T> {
    items: Vec<T>,
}

impl<T> NonEmpty<T> {
    /// Validate and wrap `items`.
    pub fn new(items: Vec<T>) -> Result<Self, AggregateError> {
        if items.is_empty() {
            return Err(AggregateError::EmptyInput);
        }
        Ok(Self { items })
    }

    /// A one-element sequence. Cannot fail.
    pub fn singleton(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// The first element. Never panics: construction guaranteed one exists.
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Number of elements, always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Numeric> NonEmpty<T> {
    /// Left-fold sum. Can only fail with `Overflow`.
    pub fn sum(&self) -> Result<T, AggregateError> {
        sum(&self.items)
    }

    /// Elementwise squares. Can only fail with `Overflow`.
    pub fn square_all(&self) -> Result<NonEmpty<T>, AggregateError> {
        square_all(&self.items).map(|items| NonEmpty { items })
    }

    /// Floating-point average. Can only fail with `Overflow`.
    pub fn average(&self) -> Result<f64, AggregateError> {
        average(&self.items)
    }

    /// All three at once. Can only fail with `Overflow`.
    pub fn aggregate(&self) -> Result<Aggregation<T>, AggregateError> {
        aggregate(&self.items)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = AggregateError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(value: NonEmpty<T>) -> Self {
        value.items
    }
}

impl<T> AsRef<[T]> for NonEmpty<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded prefixes.
//!
//! `take_first(seq, n)` returns the first `min(n, len)` elements. There is no
//! failure path: `n <= 0`, an empty sequence, or (through the JSON entry
//! point) a value that isn't an array at all, each produce an empty result.
//!
//! The typed entry point borrows instead of copying. The result is always a
//! subslice starting at `sequence[0]`, so callers that need ownership can
//! `to_vec()` it themselves.

use crate::contracts::check_prefix;

/// Prefix length used when the caller doesn't give one.
pub const DEFAULT_TAKE: i64 = 1;

/// The first `min(n, len)` elements of `sequence`, in order.
///
/// ```
/// use sequtil::take_first;
///
/// assert_eq!(take_first(&[7, 9, 0, -2], 3), &[7, 9, 0]);
/// assert_eq!(take_first(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(take_first(&[7, 9, 0, -2], -3).is_empty());
/// ```
pub fn take_first<T>(sequence: &[T], n: i64) -> &[T] {
    let len = prefix_len(n, sequence.len());
    if n <= 0 {
        tracing::debug!(n, "non-positive prefix bound, returning empty prefix");
    }

    let prefix = &sequence[..len];
    check_prefix(sequence, prefix, n);
    prefix
}

/// Number of elements a bound of `n` selects from a sequence of `len`.
fn prefix_len(n: i64, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).map_or(len, |n| n.min(len))
    }
}

/// `take_first` with the default bound of one element.
pub fn take_first_default<T>(sequence: &[T]) -> &[T] {
    take_first(sequence, DEFAULT_TAKE)
}

/// Prefix of a dynamically-typed JSON value.
///
/// Anything other than an array (null, number, string, object) is treated as
/// an invalid-shape sequence and yields an empty vector. `None` for `n` means
/// `DEFAULT_TAKE`.
#[cfg(feature = "json")]
pub fn take_first_value(value: &serde_json::Value, n: Option<i64>) -> Vec<serde_json::Value> {
    let n = n.unwrap_or(DEFAULT_TAKE);
    match value.as_array() {
        Some(items) => take_first(items, n).to_vec(),
        None => {
            tracing::debug!(kind = json_kind(value), "not a sequence, returning empty prefix");
            Vec::new()
        }
    }
}

#[cfg(feature = "json")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for integer aggregation.
//!
//! Narrow integers overflow quickly, which is the point: the aggregate
//! operations must report overflow as an error, never panic or wrap.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sequtil::{aggregate, average, square_all, sum, AggregateError};

fuzz_target!(|items: Vec<i16>| {
    let wide: Vec<i64> = items.iter().map(|&x| i64::from(x)).collect();

    match sum(&items) {
        Ok(total) => assert_eq!(i64::from(total), wide.iter().sum::<i64>()),
        Err(AggregateError::EmptyInput) => assert!(items.is_empty()),
        Err(AggregateError::Overflow { index }) => assert!(index > 0 && index < items.len()),
    }

    match square_all(&items) {
        Ok(squares) => {
            assert_eq!(squares.len(), items.len());
            for (x, sq) in wide.iter().zip(&squares) {
                assert_eq!(x * x, i64::from(*sq));
            }
        }
        Err(AggregateError::Overflow { index }) => {
            assert!(wide[index] * wide[index] > i64::from(i16::MAX));
        }
        Err(AggregateError::EmptyInput) => unreachable!("square_all accepts empty input"),
    }

    if let Ok(avg) = average(&items) {
        assert!(avg.is_finite());
    }
    let _ = aggregate(&items);
});

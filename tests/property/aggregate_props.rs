//! Property tests for sum, squares, and average.

use super::common::assert_squares_match;
use proptest::prelude::*;
use sequtil::{aggregate, average, square_all, sum, AggregateError, NonEmpty};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Non-empty integer sequences small enough that nothing overflows.
fn bounded_sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100_000i64..100_000, 1..64)
}

/// Non-empty float sequences of moderate magnitude.
fn float_sequence_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, 1..64)
}

// ============================================================================
// AGGREGATE PROPERTIES
// ============================================================================

proptest! {
    /// Property: sum equals the standard iterator sum when nothing overflows
    #[test]
    fn prop_sum_matches_iterator_sum(seq in bounded_sequence_strategy()) {
        prop_assert_eq!(sum(&seq), Ok(seq.iter().sum::<i64>()));
    }

    /// Property: squares are aligned, ordered, and non-negative
    #[test]
    fn prop_squares_aligned(seq in prop::collection::vec(-100_000i64..100_000, 0..64)) {
        let squares = square_all(&seq).unwrap();
        assert_squares_match(&seq, &squares);
        prop_assert!(squares.iter().all(|&sq| sq >= 0));
    }

    /// Property: the average lies between the extremes
    #[test]
    fn prop_average_between_min_and_max(seq in float_sequence_strategy()) {
        let avg = average(&seq).unwrap();
        let min = seq.iter().copied().fold(f64::INFINITY, f64::min);
        let max = seq.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tolerance = 1e-6 * (1.0 + min.abs().max(max.abs()));
        prop_assert!(avg >= min - tolerance && avg <= max + tolerance);
    }

    /// Property: a constant sequence averages to the constant
    #[test]
    fn prop_constant_sequence_average(value in -1_000i64..1_000, len in 1usize..50) {
        let seq = vec![value; len];
        prop_assert_eq!(average(&seq), Ok(value as f64));
        prop_assert_eq!(sum(&seq), Ok(value * len as i64));
    }

    /// Property: aggregate bundles exactly what the individual calls return
    #[test]
    fn prop_aggregate_consistent(seq in bounded_sequence_strategy()) {
        let agg = aggregate(&seq).unwrap();
        prop_assert_eq!(agg.len, seq.len());
        prop_assert_eq!(Ok(agg.sum), sum(&seq));
        prop_assert_eq!(Ok(agg.squares), square_all(&seq));
        prop_assert_eq!(Ok(agg.average), average(&seq));
    }

    /// Property: overflow is always reported, never wrapped
    #[test]
    fn prop_i8_overflow_detected(seq in prop::collection::vec(any::<i8>(), 1..16)) {
        let wide: i64 = seq.iter().map(|&x| i64::from(x)).sum();
        let narrow = sum(&seq);
        let fits_all_prefixes = seq
            .iter()
            .scan(0i64, |acc, &x| { *acc += i64::from(x); Some(*acc) })
            .all(|partial| i8::try_from(partial).is_ok());

        if fits_all_prefixes {
            prop_assert_eq!(narrow.map(i64::from), Ok(wide));
        } else {
            let overflowed = matches!(narrow, Err(AggregateError::Overflow { .. }));
            prop_assert!(overflowed, "expected overflow, got {:?}", narrow);
        }
    }

    /// Property: NonEmpty accepts exactly the non-empty vectors
    #[test]
    fn prop_non_empty_construction(seq in prop::collection::vec(any::<i32>(), 0..8)) {
        let is_empty = seq.is_empty();
        let wrapped = NonEmpty::new(seq.clone());
        prop_assert_eq!(wrapped.is_err(), is_empty);
        if let Ok(wrapped) = wrapped {
            prop_assert_eq!(wrapped.as_slice(), seq.as_slice());
        }
    }
}

//! Aggregate examples: sum, squares, average, and the empty-input policy.

use super::common::{assert_squares_match, init_tracing, ODDS, ODDS_AVERAGE, ODDS_SQUARED, ODDS_SUM};
use sequtil::{aggregate, average, square_all, sum, AggregateError, Aggregation, NonEmpty};

#[test]
fn worked_examples() {
    assert_eq!(sum(&ODDS), Ok(ODDS_SUM));
    assert_eq!(average(&ODDS), Ok(ODDS_AVERAGE));

    let squares = square_all(&ODDS).unwrap();
    assert_eq!(squares, ODDS_SQUARED);
    assert_squares_match(&ODDS, &squares);
}

#[test]
fn aggregate_matches_individual_operations() {
    let agg = aggregate(&ODDS).unwrap();
    assert_eq!(
        agg,
        Aggregation {
            len: ODDS.len(),
            sum: sum(&ODDS).unwrap(),
            squares: square_all(&ODDS).unwrap(),
            average: average(&ODDS).unwrap(),
        }
    );
}

#[test]
fn empty_input_is_a_precondition_violation() {
    init_tracing();
    let empty: Vec<i64> = Vec::new();
    assert_eq!(sum(&empty), Err(AggregateError::EmptyInput));
    assert_eq!(average(&empty), Err(AggregateError::EmptyInput));
    assert_eq!(aggregate(&empty), Err(AggregateError::EmptyInput));
    assert_eq!(square_all(&empty), Ok(Vec::new()));
}

#[test]
fn non_empty_wrapper_agrees_with_free_functions() {
    let odds = NonEmpty::new(ODDS.to_vec()).unwrap();
    assert_eq!(odds.sum(), sum(&ODDS));
    assert_eq!(odds.average(), average(&ODDS));
    assert_eq!(odds.aggregate(), aggregate(&ODDS));
}

#[test]
fn aggregation_serializes_to_json() {
    let agg = aggregate(&ODDS).unwrap();
    let json = serde_json::to_value(&agg).unwrap();
    assert_eq!(json["sum"], 25);
    assert_eq!(json["squares"], serde_json::json!([1, 9, 25, 49, 81]));
    assert_eq!(json["average"], 5.0);
}

#[test]
fn overflow_is_reported_not_wrapped() {
    init_tracing();
    assert_eq!(
        sum(&[i64::MAX - 1, 1, 1]),
        Err(AggregateError::Overflow { index: 2 })
    );
    assert_eq!(
        square_all(&[1i64, 3_037_000_500]),
        Err(AggregateError::Overflow { index: 1 })
    );
}

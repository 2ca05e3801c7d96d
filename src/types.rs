// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: the numeric element bound and the aggregation result.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Element types the aggregate operations accept.
///
/// Integers use checked arithmetic so overflow surfaces as an error instead of
/// wrapping or panicking. Floats follow IEEE semantics and never report
/// overflow (they saturate to infinity).
pub trait Numeric: Copy + Debug {
    /// `self + rhs`, or `None` if the result is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if the result is not representable.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Lossy conversion used for averaging.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// All three aggregate computations over one sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation<T> {
    /// Number of elements aggregated (always at least 1).
    pub len: usize,
    /// Left-fold sum seeded with the first element.
    pub sum: T,
    /// Elementwise squares, same order as the input.
    pub squares: Vec<T>,
    /// `sum / len` in floating point.
    pub average: f64,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for sequtil's bound and parity arithmetic.
//!
//! This standalone crate extracts the prefix clamp and the parity check and
//! proves them for every input value, not just sampled ones.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `prefix_len` never panics for any `(n, len)`
//! 2. **Bounds**: `prefix_len(n, len) <= len`, and is 0 exactly when `n <= 0` or `len == 0`
//! 3. **Parity**: `is_even` agrees with the Euclidean remainder for every `i64`

// ============================================================================
// PREFIX CLAMP (copied from src/prefix.rs)
// ============================================================================

/// Expected prefix length for a requested bound `n`.
pub fn prefix_len(n: i64, len: usize) -> usize {
    if n <= 0 {
        0
    } else {
        usize::try_from(n).map_or(len, |n| n.min(len))
    }
}

// ============================================================================
// PARITY (copied from src/parity.rs)
// ============================================================================

/// Sign-preserving remainder check.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// The clamp stays within the sequence and honors non-positive bounds.
    #[kani::proof]
    fn verify_prefix_len_bounds() {
        let n: i64 = kani::any();
        let len: usize = kani::any();

        let result = prefix_len(n, len);

        kani::assert(result <= len, "prefix can never exceed the sequence");
        if n <= 0 {
            kani::assert(result == 0, "non-positive bound must give empty prefix");
        } else if (n as u128) >= (len as u128) {
            kani::assert(result == len, "bound past the end must give whole sequence");
        } else {
            kani::assert(result as i64 == n, "in-range bound must be taken exactly");
        }
    }

    /// Slicing with the clamp never panics.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_slice_in_bounds() {
        let data = [0u8; 4];
        let len: usize = kani::any_where(|&l| l <= 4);
        let n: i64 = kani::any();

        let prefix = &data[..prefix_len(n, len)];
        kani::assert(prefix.len() <= len, "slice stays in bounds");
    }

    /// Truncating remainder agrees with Euclidean remainder on evenness.
    #[kani::proof]
    fn verify_parity_matches_euclid() {
        let n: i64 = kani::any();
        kani::assert(
            is_even(n) == (n.rem_euclid(2) == 0),
            "sign-preserving remainder must classify negatives correctly",
        );
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded prefixes.
//!
//! Any sequence and any bound, including the i64 extremes, must produce a
//! prefix of the right length without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sequtil::take_first;

/// Fuzz input for prefix extraction
#[derive(Debug, Arbitrary)]
struct PrefixInput {
    items: Vec<u16>,
    n: i64,
}

fuzz_target!(|input: PrefixInput| {
    let prefix = take_first(&input.items, input.n);

    let expected = if input.n <= 0 {
        0
    } else {
        usize::try_from(input.n).map_or(input.items.len(), |n| n.min(input.items.len()))
    };

    assert_eq!(prefix.len(), expected, "wrong prefix length for n={}", input.n);
    assert_eq!(prefix, &input.items[..expected], "prefix diverges from input head");
});

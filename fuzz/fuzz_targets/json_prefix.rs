// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the JSON prefix entry point.
//!
//! Arbitrary bytes are parsed as JSON; whatever shape comes out, the call
//! must not panic, and non-arrays must always produce an empty result.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sequtil::take_first_value;

fuzz_target!(|data: &[u8]| {
    let Some((&n, body)) = data.split_first() else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return;
    };

    let n = i64::from(n as i8);
    let prefix = take_first_value(&value, Some(n));

    match value.as_array() {
        Some(items) => {
            assert!(prefix.len() <= items.len());
            assert_eq!(prefix.as_slice(), &items[..prefix.len()]);
            if n <= 0 {
                assert!(prefix.is_empty());
            }
        }
        None => assert!(prefix.is_empty(), "non-array produced a prefix"),
    }
});

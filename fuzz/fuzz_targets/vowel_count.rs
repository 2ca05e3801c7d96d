// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for vowel counting.
//!
//! Throws arbitrary (lossily decoded) text at the counter and checks it
//! against a byte-level recount. ASCII vowels are single bytes in UTF-8 and
//! never appear inside a multi-byte sequence, so both counts must agree.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sequtil::count_vowels;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let count = count_vowels(&text);
    let recount = text
        .bytes()
        .filter(|b| matches!(b.to_ascii_lowercase(), b'a' | b'e' | b'i' | b'o' | b'u'))
        .count();

    assert_eq!(count, recount, "char and byte counts disagree for {:?}", text);
    assert!(count <= text.chars().count());
});

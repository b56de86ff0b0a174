// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ancestry line parsing.
//!
//! The lines are typed by hand, so anything can show up: HTML entities,
//! mojibake, unbalanced parentheses, lone slashes. Parsing must never panic
//! and every parsed set must keep its shape.

#![no_main]

use kindred::tokenize::{is_word_delimiter, MIN_TOKEN_LEN};
use kindred::{normalize, Ancestry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    let ancestry = Ancestry::parse(line);

    // Parsing is deterministic
    assert_eq!(ancestry, Ancestry::parse(line));

    for name in ancestry.names() {
        assert!(name.len() > 1, "short name {:?}", name);
        assert!(!name.starts_with(is_word_delimiter), "untrimmed name {:?}", name);
        assert!(!name.ends_with(is_word_delimiter), "untrimmed name {:?}", name);
    }

    for word in ancestry.words().iter().chain(ancestry.tokens()) {
        assert!(word.len() >= MIN_TOKEN_LEN, "short entry {:?}", word);
    }

    // Locations went through the alias table already
    for location in ancestry.locations() {
        assert!(!location.is_empty());
    }

    let _ = normalize(ancestry.tokens());
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for reading matches files.
//!
//! Garbage bytes must come back as an error, never as a panic.

#![no_main]

use kindred::input::read_column;
use kindred::{Ancestries, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let column = data.first().map_or(0, |b| usize::from(b % 16));

    match read_column(data, column) {
        Ok(rows) => {
            let result = Ancestries::from_lines(&rows);
            if rows.is_empty() {
                assert_eq!(result, Err(Error::EmptyDataset));
            } else {
                assert_eq!(result.map(|a| a.len()), Ok(rows.len()));
            }
        }
        Err(Error::MalformedInput { column: c, fields, .. }) => {
            assert_eq!(c, column);
            assert!(fields <= column);
        }
        Err(_) => {}
    }
});

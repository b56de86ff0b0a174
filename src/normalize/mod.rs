// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning dirty tokens into canonical ones.
//!
//! Abbreviations are expanded, a few foreign and historical place names are
//! translated into English, and junk is thrown away. Normalization never
//! fails: anything the alias table does not know passes through untouched.
//!
//! # Algorithm
//!
//! For every input token:
//!
//! 1. If the whole token is an alias key, emit its replacements and stop.
//! 2. Otherwise split the token into words and look each word up:
//!    - one replacement: the replacement takes the word's place;
//!    - several replacements: each one is emitted as a standalone entry and
//!      the word leaves the token;
//!    - no replacement (noise): the word is dropped;
//!    - not an alias: the word stays.
//! 3. Join the surviving words with single spaces and emit the result if it
//!    is at least [`MIN_TOKEN_LEN`] bytes long.
//!
//! ```text
//! "tx"                       → {texas, usa}
//! "united states of america" → {usa}
//! "dallas tx"                → {dallas, texas, usa}
//! "east uk"                  → {east united kingdom}
//! ```

pub mod aliases;

use crate::tokenize::{is_word_delimiter, MIN_TOKEN_LEN};
use std::collections::BTreeSet;

/// Normalize a set of lower-cased tokens (or words).
pub fn normalize<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = BTreeSet::new();

    for token in tokens {
        let token = token.as_ref();

        if let Some(canonical) = aliases::lookup(token) {
            result.extend(canonical.iter().map(|clean| (*clean).to_owned()));
            continue;
        }

        let mut kept: Vec<&str> = Vec::new();
        for word in token.split(is_word_delimiter).filter(|w| !w.is_empty()) {
            match aliases::lookup(word) {
                None => kept.push(word),
                Some(&[single]) => kept.push(single),
                Some(several) => {
                    result.extend(several.iter().map(|clean| (*clean).to_owned()));
                }
            }
        }

        let cleaned = kept.join(" ");
        if cleaned.len() >= MIN_TOKEN_LEN {
            result.insert(cleaned);
        }
    }

    result
}

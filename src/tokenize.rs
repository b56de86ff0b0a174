// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting raw ancestry text into words and tokens.
//!
//! Family Finder users type their ancestral information by hand, so the same
//! place shows up as "Berlin, Germany", "Berlin-Germany" or "(Berlin/Germany)".
//! Two views of a line come out of here:
//!
//! - **Tokens** are cut only at punctuation, so "United States of America"
//!   survives as one unit and can be matched against the alias table whole.
//! - **Words** are cut at punctuation *and* whitespace.
//!
//! Every token delimiter is also a word delimiter. Pieces shorter than
//! [`MIN_TOKEN_LEN`] bytes are dropped in both views.

use std::collections::BTreeSet;

/// Minimal length of a word or token, in bytes.
pub const MIN_TOKEN_LEN: usize = 2;

/// Characters that separate semantic units of text.
pub const TOKEN_DELIMITERS: [char; 7] = [',', '/', '(', ')', '-', '&', ';'];

/// True for the punctuation that ends a token.
#[inline]
pub fn is_token_delimiter(c: char) -> bool {
    TOKEN_DELIMITERS.contains(&c)
}

/// True for whitespace and for every token delimiter.
#[inline]
pub fn is_word_delimiter(c: char) -> bool {
    c.is_whitespace() || is_token_delimiter(c)
}

/// Strip leading and trailing whitespace and punctuation delimiters.
pub fn trim_delimiters(text: &str) -> &str {
    text.trim_matches(is_word_delimiter)
}

/// Extract the tokens of a line.
///
/// A token is one or more words that belong together, e.g.
/// "united states of america". The line should already be lower-cased.
pub fn extract_tokens(line: &str) -> BTreeSet<String> {
    line.split(is_token_delimiter)
        .map(trim_delimiters)
        .filter(|field| field.len() >= MIN_TOKEN_LEN)
        .map(str::to_owned)
        .collect()
}

/// Extract the distinct words of a line.
pub fn extract_words(line: &str) -> BTreeSet<String> {
    line.split(is_word_delimiter)
        .map(str::trim)
        .filter(|field| field.len() >= MIN_TOKEN_LEN)
        .map(str::to_owned)
        .collect()
}

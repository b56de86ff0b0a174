// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One cousin's ancestral surnames and locations.
//!
//! A Family Finder "ancestral surnames" cell looks like
//!
//! ```text
//! Miller (Bavaria, Germany)/Smith/O'Brien (County Cork, Ireland)
//! ```
//!
//! Entries are separated by "/". Each entry has a surname and sometimes a
//! location in parentheses; a location may have several parts, e.g. a town and
//! a country. Besides the structured names and locations the parser keeps
//! every normalized word and token of the line, which is what filtering and
//! the quick country search match against.

use crate::normalize::normalize;
use crate::tokenize::{extract_tokens, extract_words, trim_delimiters};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A parsed ancestry line. All strings are lower-case and deduplicated.
///
/// Every field is a pure function of the raw line: parsing the same line twice
/// yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ancestry {
    line: String,
    words: BTreeSet<String>,
    tokens: BTreeSet<String>,
    names: BTreeSet<String>,
    locations: BTreeSet<String>,
}

impl Ancestry {
    /// Parse a single line of a Family Finder matches file.
    pub fn parse(line: &str) -> Self {
        let line = line.to_lowercase();
        let words = normalize(extract_words(&line));
        let tokens = normalize(extract_tokens(&line));

        let mut names = BTreeSet::new();
        let mut locations = BTreeSet::new();

        for entry in line.split('/').map(str::trim) {
            let (name, location) = match entry.find('(') {
                Some(pos) if pos > 0 => {
                    let location = (pos < entry.len() - 1).then(|| &entry[pos + 1..]);
                    (&entry[..pos], location)
                }
                _ => (entry, None),
            };

            let name = trim_delimiters(name);
            if name.len() > 1 {
                names.insert(name.to_owned());
            }

            if let Some(location) = location.map(trim_delimiters) {
                if location.len() > 1 {
                    locations.extend(normalize(extract_tokens(location)));
                }
            }
        }

        Self {
            line,
            words,
            tokens,
            names,
            locations,
        }
    }

    /// The original line, lower-cased.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Normalized words of the whole line.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Normalized tokens of the whole line.
    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }

    /// Ancestral surnames.
    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Ancestral locations.
    pub fn locations(&self) -> &BTreeSet<String> {
        &self.locations
    }

    /// Check whether `name` appears anywhere in the line.
    ///
    /// Words and tokens are checked, not just the structured surnames and
    /// locations, so "germany" matches a cousin who wrote "Miller/Germany"
    /// without parentheses.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.words.contains(&name) || self.tokens.contains(&name)
    }

    /// True if any surname is in `names`.
    pub fn has_any_name(&self, names: &BTreeSet<String>) -> bool {
        !self.names.is_disjoint(names)
    }

    /// True if any location is in `locations`.
    pub fn has_any_location(&self, locations: &BTreeSet<String>) -> bool {
        !self.locations.is_disjoint(locations)
    }

    /// Same parsed ancestral information, regardless of how the raw text was
    /// spaced or capitalized.
    pub fn same_ancestry(&self, other: &Ancestry) -> bool {
        self.words == other.words
            && self.tokens == other.tokens
            && self.names == other.names
            && self.locations == other.locations
    }
}

impl FromStr for Ancestry {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

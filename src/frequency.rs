// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting how many cousins share a surname or location.
//!
//! # Ordering
//!
//! Counting walks the candidates in the order they were given and drops the
//! ones nobody shares. [`Frequencies::sort_descending`] is a **stable** sort:
//! entries with equal counts keep the candidate order. The quick country
//! search depends on this to print ties in gazetteer order, and two runs over
//! the same input always print the same list.

use crate::ancestry::Ancestry;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Which part of an ancestry a frequency count tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Every normalized word of the line (quick search).
    Words,
    /// Ancestral surnames.
    Names,
    /// Ancestral locations (detailed analysis).
    Locations,
}

impl Field {
    /// The set this field selects from `ancestry`.
    pub fn of(self, ancestry: &Ancestry) -> &BTreeSet<String> {
        match self {
            Field::Words => ancestry.words(),
            Field::Names => ancestry.names(),
            Field::Locations => ancestry.locations(),
        }
    }
}

/// The number of cousins who share an ancestral name or location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
    /// The ancestral name or location, spelled as the candidate was.
    pub name: String,
    /// How many cousins share it.
    pub count: usize,
}

/// A list of frequencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frequencies(Vec<Frequency>);

impl Frequencies {
    pub fn new(entries: Vec<Frequency>) -> Self {
        Self(entries)
    }

    /// Count, for each candidate, the records whose `field` contains it.
    ///
    /// Candidates are compared lower-cased. Zero counts are dropped.
    pub fn count<I, S>(records: &[Ancestry], candidates: I, field: Field) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = candidates
            .into_iter()
            .filter_map(|candidate| {
                let name = candidate.as_ref();
                let key = name.to_lowercase();
                let count = records
                    .iter()
                    .filter(|ancestry| field.of(ancestry).contains(&key))
                    .count();
                (count > 0).then(|| Frequency {
                    name: name.to_owned(),
                    count,
                })
            })
            .collect();
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frequency> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Frequency] {
        &self.0
    }

    /// Sort by count, highest first. Ties keep their relative order.
    pub fn sort_descending(&mut self) {
        self.0.sort_by(|a, b| b.count.cmp(&a.count));
    }

    /// Builder-style [`sort_descending`](Self::sort_descending).
    pub fn sorted_descending(mut self) -> Self {
        self.sort_descending();
        self
    }

    /// Entries shared by at least `min` cousins.
    pub fn at_least(&self, min: usize) -> impl Iterator<Item = &Frequency> + '_ {
        self.0.iter().filter(move |freq| freq.count >= min)
    }

    /// Write `<count> <name>` lines for entries with at least `min` cousins.
    pub fn write_text<W: Write>(&self, mut writer: W, min: usize) -> io::Result<()> {
        for freq in self.at_least(min) {
            writeln!(writer, "{} {}", freq.count, freq.name)?;
        }
        writer.flush()
    }

    /// Write the frequencies as CSV with a `Location,Value` header.
    ///
    /// Lines end in CRLF. Entries with a zero count are not written.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        out.write_record(["Location", "Value"])?;
        for freq in self.0.iter().filter(|freq| freq.count > 0) {
            let count = freq.count.to_string();
            out.write_record([freq.name.as_str(), count.as_str()])?;
        }
        out.flush().map_err(|e| Error::Csv(e.to_string()))
    }

    /// [`write_csv`](Self::write_csv) to a new file at `path`.
    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.write_csv(file)
    }
}

impl FromIterator<Frequency> for Frequencies {
    fn from_iter<T: IntoIterator<Item = Frequency>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Frequencies {
    type Item = Frequency;
    type IntoIter = std::vec::IntoIter<Frequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frequencies {
    type Item = &'a Frequency;
    type IntoIter = std::slice::Iter<'a, Frequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collections of parsed ancestries and the set algebra over them.
//!
//! [`Ancestries`] holds the cousins of one matches file in row order.
//! [`AncestriesList`] holds several files at once, for uniting and
//! intersecting the matches of different testers.
//!
//! Every operation returns a new collection; nothing is modified in place.

mod list;

pub use list::AncestriesList;

use crate::ancestry::Ancestry;
use crate::error::{Error, Result};
use crate::frequency::{Field, Frequencies};
use std::collections::BTreeSet;

/// An ordered collection of cousins' ancestries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ancestries {
    records: Vec<Ancestry>,
}

impl Ancestries {
    pub fn new(records: Vec<Ancestry>) -> Self {
        Self { records }
    }

    /// Parse one ancestry per line.
    ///
    /// Fails with [`Error::EmptyDataset`] when there are no lines at all.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<Ancestry> = lines
            .into_iter()
            .map(|line| Ancestry::parse(line.as_ref()))
            .collect();
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ancestry> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Ancestry] {
        &self.records
    }

    /// Cousins whose ancestry contains `name`, in order.
    pub fn filter(&self, name: &str) -> Ancestries {
        self.records
            .iter()
            .filter(|ancestry| ancestry.contains(name))
            .cloned()
            .collect()
    }

    /// Same as [`filter`](Self::filter); the name used by cluster analysis.
    pub fn include(&self, name: &str) -> Ancestries {
        self.filter(name)
    }

    /// Cousins whose ancestry does not contain `name`, in order.
    pub fn exclude(&self, name: &str) -> Ancestries {
        self.records
            .iter()
            .filter(|ancestry| !ancestry.contains(name))
            .cloned()
            .collect()
    }

    /// Exclude every cousin matching any of `names`.
    pub fn exclude_all<S: AsRef<str>>(&self, names: &[S]) -> Ancestries {
        names
            .iter()
            .fold(self.clone(), |rest, name| rest.exclude(name.as_ref()))
    }

    /// Cluster analysis: keep the cousins matching any of `names`.
    ///
    /// Names are processed in order. A cousin is attributed to the first name
    /// it matches and is not tested again, so each cousin appears at most once.
    pub fn cluster<S: AsRef<str>>(&self, names: &[S]) -> Ancestries {
        self.cluster_groups(names)
            .into_iter()
            .flat_map(|(_, group)| group.records)
            .collect()
    }

    /// Cluster analysis, keeping the group of cousins attributed to each name.
    pub fn cluster_groups<S: AsRef<str>>(&self, names: &[S]) -> Vec<(String, Ancestries)> {
        let mut rest = self.clone();
        let mut groups = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let group = rest.include(name);
            rest = rest.exclude(name);
            groups.push((name.to_owned(), group));
        }
        groups
    }

    /// All ancestral surnames.
    pub fn names(&self) -> BTreeSet<String> {
        self.union_of(Field::Names)
    }

    /// All ancestral locations.
    pub fn locations(&self) -> BTreeSet<String> {
        self.union_of(Field::Locations)
    }

    fn union_of(&self, field: Field) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|ancestry| field.of(ancestry).iter().cloned())
            .collect()
    }

    /// How many cousins share each candidate, testing the given field.
    ///
    /// Candidates keep their order; candidates nobody shares are dropped.
    pub fn frequencies_of<I, S>(&self, candidates: I, field: Field) -> Frequencies
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Frequencies::count(&self.records, candidates, field)
    }

    /// Frequencies of candidates anywhere in the words of each line.
    ///
    /// This is the quick country search.
    pub fn frequencies_of_words<I, S>(&self, candidates: I) -> Frequencies
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.frequencies_of(candidates, Field::Words)
    }

    /// How many cousins share which ancestral surnames.
    pub fn frequencies_of_names<I, S>(&self, candidates: I) -> Frequencies
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.frequencies_of(candidates, Field::Names)
    }

    /// How many cousins share which ancestral locations.
    pub fn frequencies_of_locations<I, S>(&self, candidates: I) -> Frequencies
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.frequencies_of(candidates, Field::Locations)
    }
}

impl FromIterator<Ancestry> for Ancestries {
    fn from_iter<T: IntoIterator<Item = Ancestry>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Ancestries {
    type Item = Ancestry;
    type IntoIter = std::vec::IntoIter<Ancestry>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ancestries {
    type Item = &'a Ancestry;
    type IntoIter = std::slice::Iter<'a, Ancestry>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<Ancestry>> for Ancestries {
    fn from(records: Vec<Ancestry>) -> Self {
        Self::new(records)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Uniting and intersecting the matches of several testers.
//!
//! Two siblings, or a parent and a child, each have their own matches file.
//! Cousins who appear in several files, or who share ancestral names and
//! places with all of them, point at the branch the testers have in common.
//!
//! "Common names" of a list are the surnames present in every file; "common
//! locations" likewise.

use super::Ancestries;
use crate::ancestry::Ancestry;
use std::collections::BTreeSet;

/// The ancestries of several matches files, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestriesList {
    files: Vec<Ancestries>,
}

impl AncestriesList {
    pub fn new(files: Vec<Ancestries>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ancestries> {
        self.files.iter()
    }

    /// All cousins of all files, in file order. Duplicates are kept.
    pub fn unite(&self) -> Ancestries {
        self.files
            .iter()
            .flat_map(|ancestries| ancestries.iter().cloned())
            .collect()
    }

    /// Cousins whose ancestral information appears identically in every file.
    ///
    /// The records are taken from the first file.
    pub fn intersect(&self) -> Ancestries {
        let Some((first, others)) = self.files.split_first() else {
            return Ancestries::default();
        };
        first
            .iter()
            .filter(|ancestry| {
                others
                    .iter()
                    .all(|other| other.iter().any(|candidate| ancestry.same_ancestry(candidate)))
            })
            .cloned()
            .collect()
    }

    /// Cousins having at least one of the common surnames.
    pub fn intersect_by_names(&self) -> Ancestries {
        let names = self.common_names();
        self.select(|ancestry| ancestry.has_any_name(&names))
    }

    /// Cousins having at least one of the common locations.
    pub fn intersect_by_locations(&self) -> Ancestries {
        let locations = self.common_locations();
        self.select(|ancestry| ancestry.has_any_location(&locations))
    }

    /// Cousins having at least one common surname and one common location.
    pub fn intersect_by_names_and_locations(&self) -> Ancestries {
        let names = self.common_names();
        let locations = self.common_locations();
        self.select(|ancestry| {
            ancestry.has_any_name(&names) && ancestry.has_any_location(&locations)
        })
    }

    /// Surnames that occur in every file.
    pub fn common_names(&self) -> BTreeSet<String> {
        self.common(Ancestries::names)
    }

    /// Locations that occur in every file.
    pub fn common_locations(&self) -> BTreeSet<String> {
        self.common(Ancestries::locations)
    }

    fn common<F>(&self, set_of: F) -> BTreeSet<String>
    where
        F: Fn(&Ancestries) -> BTreeSet<String>,
    {
        let mut files = self.files.iter();
        let Some(first) = files.next() else {
            return BTreeSet::new();
        };
        files.fold(set_of(first), |common, ancestries| {
            let other = set_of(ancestries);
            common.intersection(&other).cloned().collect()
        })
    }

    fn select<P>(&self, keep: P) -> Ancestries
    where
        P: Fn(&Ancestry) -> bool,
    {
        self.files
            .iter()
            .flat_map(|ancestries| ancestries.iter())
            .filter(|ancestry| keep(ancestry))
            .cloned()
            .collect()
    }
}

impl FromIterator<Ancestries> for AncestriesList {
    fn from_iter<T: IntoIterator<Item = Ancestries>>(iter: T) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Ancestries>> for AncestriesList {
    fn from(files: Vec<Ancestries>) -> Self {
        Self::new(files)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end analysis of one or more matches files.
//!
//! The pipeline:
//!
//! ```text
//! files ──load──▶ AncestriesList ──mode──▶ Selection ──exclude──▶ cluster ──▶ Report
//!                                 (unite, intersect, …)                 (quick search,
//!                                                                        heat map, details)
//! ```
//!
//! A [`Selection`] carries the cousins to analyse together with the surnames
//! and locations that are worth counting. After an intersection only the
//! common names/locations are counted, and the quick country search is
//! restricted to countries that survived the intersection.

use crate::ancestries::{Ancestries, AncestriesList};
use crate::error::Result;
use crate::frequency::Frequencies;
use crate::input;
use crate::places::{heat_map_locations, PREDEFINED_COUNTRIES};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// How the input files are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// A single matches file.
    Single,
    /// All cousins of all files.
    Unite,
    /// Cousins with identical ancestral information in every file.
    Intersect,
    /// Cousins sharing a common surname and a common location.
    IntersectByNamesAndLocations,
    /// Cousins sharing a common surname.
    IntersectByNames,
    /// Cousins sharing a common location.
    IntersectByLocations,
}

impl Mode {
    /// Status line announcing the operation, if any.
    pub fn describe(self, files: &str) -> Option<String> {
        let looking_for = match self {
            Mode::Single => return None,
            Mode::Unite => return Some(format!("Uniting files {}.", files)),
            Mode::Intersect => "identical ancestral information",
            Mode::IntersectByNamesAndLocations => "common names and locations",
            Mode::IntersectByNames => "common names",
            Mode::IntersectByLocations => "common locations",
        };
        Some(format!(
            "Intersecting files {}, looking for {}.",
            files, looking_for
        ))
    }
}

/// Analysis settings, usually filled in from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub files: Vec<PathBuf>,
    /// Zero-based column holding the ancestral surnames.
    pub column: usize,
    /// Only report names and places shared by at least this many cousins.
    pub min: usize,
    /// Also run the detailed location and surname analysis.
    pub details: bool,
    /// Cluster analysis terms, in priority order.
    pub cluster: Vec<String>,
    /// Cousins matching any of these are left out.
    pub exclude: Vec<String>,
    /// Also compute the heat-map frequencies.
    pub heat_map: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Single,
            files: Vec::new(),
            column: 11,
            min: 1,
            details: false,
            cluster: Vec::new(),
            exclude: Vec::new(),
            heat_map: false,
        }
    }
}

/// The cousins to analyse and the candidates worth counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub ancestries: Ancestries,
    pub names: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    /// Locations were narrowed down to those common to all files.
    pub locations_intersected: bool,
}

impl Selection {
    /// Combine the files of `list` according to `mode`.
    pub fn from_list(mode: Mode, list: &AncestriesList) -> Self {
        match mode {
            Mode::Single | Mode::Unite => Self::all_of(list.unite()),
            Mode::Intersect => Self {
                ancestries: list.intersect(),
                names: list.common_names(),
                locations: list.common_locations(),
                locations_intersected: true,
            },
            Mode::IntersectByNamesAndLocations => Self {
                ancestries: list.intersect_by_names_and_locations(),
                names: list.common_names(),
                locations: list.common_locations(),
                locations_intersected: true,
            },
            Mode::IntersectByNames => {
                let ancestries = list.intersect_by_names();
                Self {
                    locations: ancestries.locations(),
                    names: list.common_names(),
                    ancestries,
                    locations_intersected: false,
                }
            }
            Mode::IntersectByLocations => {
                let ancestries = list.intersect_by_locations();
                Self {
                    names: ancestries.names(),
                    locations: list.common_locations(),
                    ancestries,
                    locations_intersected: true,
                }
            }
        }
    }

    /// Every name and location of `ancestries` is a candidate.
    pub fn all_of(ancestries: Ancestries) -> Self {
        Self {
            names: ancestries.names(),
            locations: ancestries.locations(),
            ancestries,
            locations_intersected: false,
        }
    }

    /// Countries for the quick search.
    pub fn countries(&self) -> Vec<&'static str> {
        PREDEFINED_COUNTRIES
            .iter()
            .copied()
            .filter(|country| {
                !self.locations_intersected || self.locations.contains(&country.to_lowercase())
            })
            .collect()
    }
}

/// Size of one cluster analysis group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterGroup {
    pub name: String,
    pub cousins: usize,
}

/// Everything the analysis found. Rankings are sorted by count, descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub mode: Mode,
    /// Cousins left after exclusion and cluster filtering.
    pub cousins: usize,
    pub excluded: Vec<String>,
    pub clusters: Vec<ClusterGroup>,
    /// Quick search for predefined countries.
    pub countries: Frequencies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_map: Option<Frequencies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Frequencies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surnames: Option<Frequencies>,
}

impl Report {
    /// No cousins were left to analyse.
    pub fn is_empty(&self) -> bool {
        self.cousins == 0
    }
}

/// Load the files named in `options` and analyse them.
pub fn run(options: &Options) -> Result<Report> {
    let list = input::load_files(&options.files, options.column)?;
    let selection = Selection::from_list(options.mode, &list);
    Ok(analyze(&selection, options))
}

/// Analyse an already loaded selection.
pub fn analyze(selection: &Selection, options: &Options) -> Report {
    let mut ancestries = selection.ancestries.exclude_all(&options.exclude);

    let mut clusters = Vec::new();
    if !options.cluster.is_empty() {
        let groups = ancestries.cluster_groups(&options.cluster);
        clusters = groups
            .iter()
            .map(|(name, group)| ClusterGroup {
                name: name.clone(),
                cousins: group.len(),
            })
            .collect();
        ancestries = groups.into_iter().flat_map(|(_, group)| group).collect();
    }

    let mut report = Report {
        mode: options.mode,
        cousins: ancestries.len(),
        excluded: options.exclude.clone(),
        clusters,
        countries: Frequencies::default(),
        heat_map: None,
        locations: None,
        surnames: None,
    };
    if ancestries.is_empty() {
        return report;
    }

    let countries = selection.countries();
    report.countries = ancestries
        .frequencies_of_words(countries.iter().copied())
        .sorted_descending();

    if options.heat_map {
        let places = heat_map_locations(countries.iter().copied());
        report.heat_map = Some(ancestries.frequencies_of_words(places).sorted_descending());
    }

    if options.details {
        report.locations = Some(
            ancestries
                .frequencies_of_locations(&selection.locations)
                .sorted_descending(),
        );
        report.surnames = Some(
            ancestries
                .frequencies_of_names(&selection.names)
                .sorted_descending(),
        );
    }

    report
}

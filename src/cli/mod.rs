// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kindred command-line interface.
//!
//! One matches file is analysed by passing it as the last argument. Several
//! files are combined with exactly one of `--unite`, `--intersect`,
//! `--intersectbynalo`, `--intersectbynames` or `--intersectbylocations`,
//! each taking a comma-separated list of files.

pub mod display;

use clap::{ArgGroup, Parser};
use kindred::analysis::{Mode, Options};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "kindred",
    about = "Analyse ancestral surnames and locations of Family Finder matches",
    version
)]
#[command(group(
    ArgGroup::new("source")
        .args([
            "file",
            "unite",
            "intersect",
            "intersectbynalo",
            "intersectbynames",
            "intersectbylocations",
        ])
        .multiple(false)
))]
pub struct Cli {
    /// Family Finder matches file (CSV)
    pub file: Option<PathBuf>,

    /// Column number (1-based) for the ancestral surnames in the CSV file
    #[arg(
        long,
        alias = "namescol",
        default_value_t = 12,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub column: u32,

    /// Performs detailed analysis for locations and surnames
    #[arg(long)]
    pub details: bool,

    /// Prints only locations and names that occur at least <MIN> times
    #[arg(long, default_value_t = 1)]
    pub min: usize,

    /// Cluster analysis on the cousins whose ancestral surnames or locations
    /// match any of these comma-separated names
    #[arg(long)]
    pub cluster: Option<String>,

    /// Excludes cousins whose ancestral surnames or locations match any of
    /// these comma-separated names
    #[arg(long)]
    pub exclude: Option<String>,

    /// Writes countries, US states and frequencies of cousins to a CSV file
    #[arg(long)]
    pub csvout: Option<PathBuf>,

    /// Merges input files separated by commas
    #[arg(long)]
    pub unite: Option<String>,

    /// Intersects input files separated by commas, looking for identical
    /// ancestral information
    #[arg(long)]
    pub intersect: Option<String>,

    /// Intersects input files separated by commas, looking for common names
    /// and locations
    #[arg(long)]
    pub intersectbynalo: Option<String>,

    /// Intersects input files separated by commas, looking for common names
    #[arg(long)]
    pub intersectbynames: Option<String>,

    /// Intersects input files separated by commas, looking for common
    /// locations
    #[arg(long)]
    pub intersectbylocations: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The mode and the raw file list argument it came from.
    fn source(&self) -> Option<(Mode, Vec<PathBuf>)> {
        if let Some(file) = &self.file {
            return Some((Mode::Single, vec![file.clone()]));
        }
        let lists = [
            (Mode::Unite, &self.unite),
            (Mode::Intersect, &self.intersect),
            (Mode::IntersectByNamesAndLocations, &self.intersectbynalo),
            (Mode::IntersectByNames, &self.intersectbynames),
            (Mode::IntersectByLocations, &self.intersectbylocations),
        ];
        lists.into_iter().find_map(|(mode, list)| {
            list.as_deref()
                .map(|list| (mode, split_list(list).into_iter().map(PathBuf::from).collect()))
        })
    }

    /// Turn the command line into analysis options.
    pub fn options(&self) -> Result<Options, String> {
        let (mode, files) = self
            .source()
            .ok_or_else(|| "No input filename specified.".to_string())?;
        if files.is_empty() {
            return Err("No input filename specified.".to_string());
        }
        if let Some(csvout) = &self.csvout {
            if files.iter().any(|file| same_file(file, csvout)) {
                return Err(kindred::Error::SameFile(csvout.display().to_string()).to_string());
            }
        }
        Ok(Options {
            mode,
            files,
            column: self.column as usize - 1,
            min: self.min,
            details: self.details,
            cluster: self.cluster.as_deref().map(split_list).unwrap_or_default(),
            exclude: self.exclude.as_deref().map(split_list).unwrap_or_default(),
            heat_map: self.csvout.is_some(),
        })
    }
}

/// True if both paths name the same file. Paths that do not resolve (the CSV
/// output usually does not exist yet) are compared as written.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Split a comma-separated argument, trimming blanks and dropping empty items.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

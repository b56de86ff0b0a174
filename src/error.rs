// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading match files and writing results.
//!
//! Only structural problems are errors. Messy ancestry text never is: an
//! abbreviation nobody has seen before just passes through normalization.

use std::fmt;

/// Error type for loading and exporting ancestry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A CSV record has no field at the requested column.
    ///
    /// Column misalignment means the file is structurally wrong, so the
    /// whole load is aborted rather than skipping the row.
    MalformedInput {
        /// Zero-based record number, header included.
        row: usize,
        /// Zero-based column that was requested.
        column: usize,
        /// Number of fields the record actually has.
        fields: usize,
    },
    /// No usable rows after the header was removed.
    EmptyDataset,
    /// The CSV reader or writer failed.
    Csv(String),
    /// A file could not be opened, read or written.
    Io { path: String, message: String },
    /// The output file is the same as the input file.
    SameFile(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput {
                row,
                column,
                fields,
            } => {
                write!(
                    f,
                    "record {} has {} fields, column {} does not exist",
                    row + 1,
                    fields,
                    column + 1
                )
            }
            Error::EmptyDataset => write!(f, "empty file"),
            Error::Csv(message) => write!(f, "CSV error: {}", message),
            Error::Io { path, message } => write!(f, "{}: {}", path, message),
            Error::SameFile(path) => {
                write!(f, "CSV filename {} identical to file containing family data", path)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

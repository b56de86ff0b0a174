// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading Family Finder matches files.
//!
//! The export is a CSV file with one cousin per row; the ancestral surnames
//! live in a single column (column 12 in the classic layout). Some exports
//! start with a UTF-8 byte order mark, which is dropped before parsing.

use crate::ancestries::{Ancestries, AncestriesList};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read column `column` (zero-based) of every CSV record, minus the header.
///
/// Cells that are not valid UTF-8 (Latin-1 exports) are decoded lossily.
///
/// Fails with [`Error::EmptyDataset`] if the input has no records at all and
/// with [`Error::MalformedInput`] if any record is too short.
pub fn read_column<R: Read>(mut reader: R, column: usize) -> Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| Error::Csv(e.to_string()))?;
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut cells = Vec::new();
    for (row, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let cell = record.get(column).ok_or(Error::MalformedInput {
            row,
            column,
            fields: record.len(),
        })?;
        cells.push(String::from_utf8_lossy(cell).into_owned());
    }

    if cells.is_empty() {
        return Err(Error::EmptyDataset);
    }
    cells.remove(0);
    Ok(cells)
}

/// Load the ancestries of one matches file.
pub fn load_file(path: &Path, column: usize) -> Result<Ancestries> {
    let file = File::open(path).map_err(|e| Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let rows = read_column(file, column)?;
    Ancestries::from_lines(rows)
}

/// Load several matches files, in order.
pub fn load_files<P: AsRef<Path>>(paths: &[P], column: usize) -> Result<AncestriesList> {
    paths
        .iter()
        .map(|path| load_file(path.as_ref(), column))
        .collect::<Result<Vec<_>>>()
        .map(AncestriesList::new)
}

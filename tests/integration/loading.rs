//! Reading matches files from disk.

use super::common::{MatchesDir, ANCESTRY_COLUMN, COUSINS};
use kindred::input::{load_file, load_files};
use kindred::Error;

#[test]
fn loads_ancestry_column() {
    let dir = MatchesDir::new();
    let path = dir.write("matches.csv", COUSINS);

    let cousins = load_file(&path, ANCESTRY_COLUMN).unwrap();
    assert_eq!(cousins.len(), COUSINS.len());

    let first = &cousins.as_slice()[0];
    assert_eq!(first.line(), COUSINS[0].to_lowercase());
    assert!(first.names().contains("schmidt"));
    assert!(first.locations().contains("germany"));
}

#[test]
fn quoted_fields_keep_their_commas() {
    let dir = MatchesDir::new();
    let path = dir.write("matches.csv", &["Murphy (Cork, Ireland)"]);

    let cousins = load_file(&path, ANCESTRY_COLUMN).unwrap();
    let locations: Vec<&str> = cousins.as_slice()[0]
        .locations()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(locations, ["cork", "ireland"]);
}

#[test]
fn byte_order_mark_is_ignored() {
    let dir = MatchesDir::new();
    let path = dir.write_raw("bom.csv", b"\xEF\xBB\xBFAncestry\nWeber (Germany)\n");

    let cousins = load_file(&path, 0).unwrap();
    assert_eq!(cousins.as_slice()[0].line(), "weber (germany)");
}

#[test]
fn short_row_aborts_the_load() {
    let dir = MatchesDir::new();
    let path = dir.write_raw("short.csv", b"a,b,c\n1,2,Smith\n3,4\n");

    let err = load_file(&path, 2).unwrap_err();
    assert_eq!(
        err,
        Error::MalformedInput {
            row: 2,
            column: 2,
            fields: 2
        }
    );
}

#[test]
fn header_only_file_is_empty() {
    let dir = MatchesDir::new();
    let path = dir.write("empty.csv", &[]);

    assert_eq!(load_file(&path, ANCESTRY_COLUMN), Err(Error::EmptyDataset));
}

#[test]
fn missing_file_names_the_path() {
    let dir = MatchesDir::new();
    let path = dir.path("missing.csv");

    match load_file(&path, ANCESTRY_COLUMN) {
        Err(Error::Io { path: reported, .. }) => assert!(reported.ends_with("missing.csv")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn several_files_load_in_order() {
    let dir = MatchesDir::new();
    let first = dir.write("a.csv", &["Smith (Texas)"]);
    let second = dir.write("b.csv", &["Weber (Germany)", "Nowak (Poland)"]);

    let list = load_files(&[first, second], ANCESTRY_COLUMN).unwrap();
    let sizes: Vec<usize> = list.iter().map(|file| file.len()).collect();
    assert_eq!(sizes, [1, 2]);
}

#[test]
fn one_bad_file_fails_the_batch() {
    let dir = MatchesDir::new();
    let good = dir.write("a.csv", COUSINS);
    let empty = dir.write("b.csv", &[]);

    assert_eq!(
        load_files(&[good, empty], ANCESTRY_COLUMN).unwrap_err(),
        Error::EmptyDataset
    );
}

#[test]
fn latin1_export_loads_with_replacement_characters() {
    let dir = MatchesDir::new();
    let path = dir.write_raw("latin1.csv", b"Ancestry\nM\xFCller (Germany)\nSmith (Texas)\n");

    let cousins = load_file(&path, 0).unwrap();
    assert_eq!(cousins.len(), 2);
    assert!(cousins.as_slice()[0].locations().contains("germany"));
    assert!(cousins.as_slice()[0].names().contains("m\u{FFFD}ller"));
}

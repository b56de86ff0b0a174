//! Heat-map CSV export.

use super::common::{MatchesDir, ANCESTRY_COLUMN, COUSINS};
use kindred::analysis::{run, Options};
use kindred::{Frequencies, Frequency};
use std::fs;

#[test]
fn heat_map_file_lists_states_instead_of_usa() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);
    let out = dir.path("heat.csv");

    let report = run(&Options {
        files: vec![file],
        column: ANCESTRY_COLUMN,
        heat_map: true,
        ..Options::default()
    })
    .unwrap();
    report.heat_map.as_ref().unwrap().write_csv_file(&out).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.split("\r\n");
    assert_eq!(lines.next(), Some("Location,Value"));
    assert!(content.starts_with("Location,Value\r\nGermany,2\r\nTexas,2\r\n"));
    assert!(content.contains("Ohio,1\r\n"));
    assert!(!content.contains("USA"));
}

#[test]
fn names_with_commas_are_quoted() {
    let dir = MatchesDir::new();
    let out = dir.path("quoted.csv");
    let freqs: Frequencies = vec![
        Frequency {
            name: "Korea, South".to_string(),
            count: 2,
        },
        Frequency {
            name: "Nowhere".to_string(),
            count: 0,
        },
    ]
    .into_iter()
    .collect();

    freqs.write_csv_file(&out).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Location,Value\r\n\"Korea, South\",2\r\n"
    );
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = MatchesDir::new();
    let out = dir.path("no/such/dir/heat.csv");

    let err = Frequencies::default().write_csv_file(&out).unwrap_err();
    assert!(matches!(err, kindred::Error::Io { .. }));
}

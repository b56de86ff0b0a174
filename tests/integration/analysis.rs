//! End-to-end analysis runs over files on disk.

use super::common::{pairs, MatchesDir, ANCESTRY_COLUMN, COUSINS};
use kindred::analysis::{run, Mode, Options};

fn options(mode: Mode, files: Vec<std::path::PathBuf>) -> Options {
    Options {
        mode,
        files,
        column: ANCESTRY_COLUMN,
        ..Options::default()
    }
}

fn owned(items: &[(&str, usize)]) -> Vec<(String, usize)> {
    items.iter().map(|(name, count)| (name.to_string(), *count)).collect()
}

#[test]
fn single_file_quick_search() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let report = run(&options(Mode::Single, vec![file])).unwrap();
    assert_eq!(report.cousins, COUSINS.len());
    assert_eq!(
        pairs(&report.countries),
        owned(&[
            ("Germany", 2),
            ("USA", 2),
            ("France", 1),
            ("Ireland", 1),
            ("Poland", 1)
        ])
    );
}

#[test]
fn details_count_locations_and_surnames() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let report = run(&Options {
        details: true,
        ..options(Mode::Single, vec![file])
    })
    .unwrap();

    let locations = pairs(report.locations.as_ref().unwrap());
    assert_eq!(&locations[..3], owned(&[("germany", 2), ("texas", 2), ("usa", 2)]));
    let surnames = pairs(report.surnames.as_ref().unwrap());
    assert_eq!(&surnames[..2], owned(&[("smith", 2), ("weber", 2)]));
}

#[test]
fn unite_counts_cousins_of_all_files() {
    let dir = MatchesDir::new();
    let a = dir.write("a.csv", &["Smith (Germany)", "Jones (Ireland)"]);
    let b = dir.write("b.csv", &["Weber (Deutschland)"]);

    let report = run(&options(Mode::Unite, vec![a, b])).unwrap();
    assert_eq!(report.cousins, 3);
    assert_eq!(
        pairs(&report.countries),
        owned(&[("Germany", 2), ("Ireland", 1)])
    );
}

#[test]
fn intersect_keeps_identical_ancestries() {
    let dir = MatchesDir::new();
    let a = dir.write("a.csv", &["Smith (Germany)", "Jones (Ireland)"]);
    let b = dir.write("b.csv", &["SMITH ( Germany )", "Weber (Poland)"]);

    let report = run(&options(Mode::Intersect, vec![a, b])).unwrap();
    assert_eq!(report.cousins, 1);
    assert_eq!(pairs(&report.countries), owned(&[("Germany", 1)]));
}

#[test]
fn intersect_by_names_takes_cousins_from_every_file() {
    let dir = MatchesDir::new();
    let a = dir.write("a.csv", &["Smith (Germany)", "Jones (Ireland)"]);
    let b = dir.write("b.csv", &["Smith (Texas)", "Weber (Poland)"]);

    let report = run(&Options {
        details: true,
        ..options(Mode::IntersectByNames, vec![a, b])
    })
    .unwrap();
    assert_eq!(report.cousins, 2);
    assert_eq!(
        pairs(report.surnames.as_ref().unwrap()),
        owned(&[("smith", 2)])
    );
    assert_eq!(
        pairs(&report.countries),
        owned(&[("Germany", 1), ("USA", 1)])
    );
}

#[test]
fn intersect_by_names_and_locations_needs_both() {
    let dir = MatchesDir::new();
    let a = dir.write("a.csv", &["Smith (Germany)", "Smith (Ireland)", "Nowak (Germany)"]);
    let b = dir.write("b.csv", &["Smith (Bayern, Germany)"]);

    let report = run(&options(Mode::IntersectByNamesAndLocations, vec![a, b])).unwrap();
    assert_eq!(report.cousins, 2);
    assert_eq!(pairs(&report.countries), owned(&[("Germany", 2)]));
}

#[test]
fn exclusion_and_clusters_from_files() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let report = run(&Options {
        exclude: vec!["Texas".to_string()],
        cluster: vec!["Germany".to_string(), "Poland".to_string()],
        ..options(Mode::Single, vec![file])
    })
    .unwrap();

    let clusters: Vec<(&str, usize)> = report
        .clusters
        .iter()
        .map(|group| (group.name.as_str(), group.cousins))
        .collect();
    assert_eq!(clusters, [("Germany", 1), ("Poland", 1)]);
    assert_eq!(report.cousins, 2);
}

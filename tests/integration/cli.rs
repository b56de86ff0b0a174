//! Running the kindred binary.

use super::common::{MatchesDir, COUSINS};
use std::process::{Command, Output};

fn kindred(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kindred"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run kindred")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_quick_search() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let output = kindred(&["--column", "11", file.to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("--- Quick search for predefined countries ---\n"));
    assert!(text.contains("Number of cousins:  Ancestry from:\n2 Germany\n2 USA\n1 France\n"));
}

#[test]
fn min_hides_rare_entries() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let output = kindred(&["--column", "11", "--min", "2", file.to_str().unwrap()]);
    let text = stdout(&output);
    assert!(text.contains("2 USA\n"));
    assert!(!text.contains("1 France"));
}

#[test]
fn empty_file_reports_no_data() {
    let dir = MatchesDir::new();
    let file = dir.write("empty.csv", &[]);

    let output = kindred(&["--column", "11", file.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No data found."));
}

#[test]
fn missing_input_fails() {
    let output = kindred(&[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No input filename specified."));
}

#[test]
fn csv_output_cannot_overwrite_input() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);
    let path = file.to_str().unwrap();

    let output = kindred(&["--column", "11", "--csvout", path, path]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("identical"));
}

#[test]
fn unite_announces_files_and_writes_csv() {
    let dir = MatchesDir::new();
    let a = dir.write("a.csv", &["Smith (Germany)"]);
    let b = dir.write("b.csv", &["Jones (TX)"]);
    let out = dir.path("heat.csv");
    let list = format!("{},{}", a.display(), b.display());

    let output = kindred(&[
        "--column",
        "11",
        "--unite",
        &list,
        "--csvout",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(&format!("Uniting files {}.", list)));
    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.contains("Germany,1\r\n"));
    assert!(csv.contains("Texas,1\r\n"));
}

#[test]
fn json_report() {
    let dir = MatchesDir::new();
    let file = dir.write("matches.csv", COUSINS);

    let output = kindred(&["--column", "11", "--json", "--details", file.to_str().unwrap()]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "single");
    assert_eq!(report["cousins"], 7);
    assert_eq!(report["countries"][0]["name"], "Germany");
    assert_eq!(report["countries"][0]["count"], 2);
    assert!(report["surnames"].is_array());
    assert!(report.get("heat_map").is_none());
}

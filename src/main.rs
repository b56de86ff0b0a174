// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use kindred::analysis::{self, Options};
use kindred::Error;

mod cli;
use cli::{display, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        display::error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let options = cli.options()?;
    if !cli.json {
        announce(&options);
    }

    let report = match analysis::run(&options) {
        Ok(report) => report,
        Err(Error::EmptyDataset) => {
            println!("No data found.");
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };
    if report.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    if let (Some(csvout), Some(heat_map)) = (&cli.csvout, &report.heat_map) {
        heat_map.write_csv_file(csvout).map_err(|e| e.to_string())?;
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    display::report(&report, options.min).map_err(|e| format!("Failed to write report: {}", e))
}

fn announce(options: &Options) {
    let files: Vec<String> = options
        .files
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    if let Some(message) = options.mode.describe(&files.join(",")) {
        display::status(&message);
    }
}


// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the kindred CLI.
//!
//! On a color terminal each ranking gets a box with the counts right-aligned.
//! Piped or with `NO_COLOR` set, the output is the plain `<count> <name>`
//! listing that spreadsheet users paste into their notes.
//!
//! # Theme detection order
//!
//! 1. `KINDRED_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use kindred::analysis::Report;
use kindred::Frequencies;
use std::io;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KINDRED_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191); // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66); // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn use_colors_stderr() -> bool {
    std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// MESSAGES
// ═══════════════════════════════════════════════════════════════════════════

/// Informational line on stdout.
pub fn status(message: &str) {
    println!("{}", themed(CYAN, &[], message));
    println!();
}

/// Error on stderr.
pub fn error(message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}error:{} {}", BOLD, RED(), RESET, message);
    } else {
        eprintln!("error: {}", message);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

fn section_top(label: &str) {
    let border = GRAY();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Print one ranking, keeping entries shared by at least `min` cousins.
pub fn ranking(title: &str, caption: &str, freqs: &Frequencies, min: usize) -> io::Result<()> {
    if !use_colors() {
        println!("--- {} ---", title);
        println!("Number of cousins:  {}", caption);
        return freqs.write_text(io::stdout().lock(), min);
    }

    section_top(title);
    let width = freqs
        .iter()
        .map(|freq| freq.count.to_string().len())
        .max()
        .unwrap_or(1);
    for freq in freqs.at_least(min) {
        let count = themed(GREEN, &[BOLD], &freq.count.to_string());
        let name = themed(WHITE, &[], &freq.name);
        row(&format!(" {}  {}", pad_left(&count, width), name));
    }
    section_bot();
    Ok(())
}

/// Print the whole report.
pub fn report(report: &Report, min: usize) -> io::Result<()> {
    if !report.excluded.is_empty() {
        status(&format!(
            "Cousins whose ancestral surnames or locations match {} are excluded from analysis.",
            report.excluded.join(", ")
        ));
    }
    if !report.clusters.is_empty() {
        let groups: Vec<String> = report
            .clusters
            .iter()
            .map(|group| format!("{} ({})", group.name, group.cousins))
            .collect();
        status(&format!("Cluster analysis for {}.", groups.join(", ")));
    }

    ranking(
        "Quick search for predefined countries",
        "Ancestry from:",
        &report.countries,
        min,
    )?;

    if let Some(locations) = &report.locations {
        println!();
        ranking(
            "Detailed analysis of ancestral locations",
            "Ancestry from:",
            locations,
            min,
        )?;
    }
    if let Some(surnames) = &report.surnames {
        println!();
        ranking(
            "Detailed analysis of ancestral surnames",
            "Ancestral surname:",
            surnames,
            min,
        )?;
    }
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The alias table: dirty spellings and their canonical forms.
//!
//! Keys are lower-case. A key maps to zero, one or several canonical strings.
//! An empty list marks noise (HTML entity fragments, filler words). US state
//! codes and names expand to the state plus "usa" so a search for the country
//! also finds cousins who only wrote down a state.
//!
//! Georgia the state becomes "georgia usa" so it never counts as the country.

use std::collections::HashMap;
use std::sync::LazyLock;

const USA: &str = "usa";

/// Raw table. Order is irrelevant; keys are unique.
static ALIAS_TABLE: &[(&str, &[&str])] = &[
    // Noise
    ("gt", &[]),
    ("amp", &[]),
    ("ii", &[]),
    ("???", &[]),
    ("now", &[]),
    ("also", &[]),
    ("unknown", &[]),
    // US state codes
    ("al", &["alabama", USA]),
    ("ak", &["alaska", USA]),
    ("ar", &["arkansas", USA]),
    ("az", &["arizona", USA]),
    ("ca", &["california", USA]),
    ("co", &["colorado", USA]),
    ("ct", &["connecticut", USA]),
    ("de", &["delaware", USA]),
    ("dc", &["district of columbia", USA]),
    ("fl", &["florida", USA]),
    ("ga", &["georgia usa", USA]),
    ("hi", &["hawaii", USA]),
    ("ia", &["iowa", USA]),
    ("id", &["idaho", USA]),
    ("il", &["illinois", USA]),
    ("in", &["indiana", USA]),
    ("ky", &["kentucky", USA]),
    ("ks", &["kansas", USA]),
    ("la", &["louisiana", USA]),
    ("ma", &["massachusetts", USA]),
    ("md", &["maryland", USA]),
    ("me", &["maine", USA]),
    ("mi", &["michigan", USA]),
    ("mo", &["missouri", USA]),
    ("mn", &["minnesota", USA]),
    ("ms", &["mississippi", USA]),
    ("mt", &["montana", USA]),
    ("nc", &["north carolina", USA]),
    ("nd", &["north dakota", USA]),
    ("ne", &["nebraska", USA]),
    ("nh", &["new hampshire", USA]),
    ("nj", &["new jersey", USA]),
    ("nm", &["new mexico", USA]),
    ("nv", &["nevada", USA]),
    ("ny", &["new york", USA]),
    ("nyc", &["new york", USA]),
    ("oh", &["ohio", USA]),
    ("ok", &["oklahoma", USA]),
    ("or", &["oregon", USA]),
    ("pa", &["pennsylvania", USA]),
    ("ri", &["rhode island", USA]),
    ("sc", &["south carolina", USA]),
    ("sd", &["south dakota", USA]),
    ("tn", &["tennessee", USA]),
    ("tx", &["texas", USA]),
    ("uk", &["united kingdom"]),
    ("us", &[USA]),
    ("ut", &["utah", USA]),
    ("va", &["virginia", USA]),
    ("vt", &["vermont", USA]),
    ("wa", &["washington", USA]),
    ("wi", &["wisconsin", USA]),
    ("wv", &["west virginia", USA]),
    ("wy", &["wyoming", USA]),
    // US state names
    ("alabama", &["alabama", USA]),
    ("alaska", &["alaska", USA]),
    ("arkansas", &["arkansas", USA]),
    ("arizona", &["arizona", USA]),
    ("california", &["california", USA]),
    ("colorado", &["colorado", USA]),
    ("connecticut", &["connecticut", USA]),
    ("delaware", &["delaware", USA]),
    ("district of columbia", &["district of columbia", USA]),
    ("florida", &["florida", USA]),
    ("georgia usa", &["georgia usa", USA]),
    ("hawaii", &["hawaii", USA]),
    ("iowa", &["iowa", USA]),
    ("idaho", &["idaho", USA]),
    ("illinois", &["illinois", USA]),
    ("indiana", &["indiana", USA]),
    ("kentucky", &["kentucky", USA]),
    ("kansas", &["kansas", USA]),
    ("louisiana", &["louisiana", USA]),
    ("massachusetts", &["massachusetts", USA]),
    ("maryland", &["maryland", USA]),
    ("maine", &["maine", USA]),
    ("michigan", &["michigan", USA]),
    ("missouri", &["missouri", USA]),
    ("minnesota", &["minnesota", USA]),
    ("mississippi", &["mississippi", USA]),
    ("montana", &["montana", USA]),
    ("north carolina", &["north carolina", USA]),
    ("north dakota", &["north dakota", USA]),
    ("nebraska", &["nebraska", USA]),
    ("new hampshire", &["new hampshire", USA]),
    ("new jersey", &["new jersey", USA]),
    ("new mexico", &["new mexico", USA]),
    ("nevada", &["nevada", USA]),
    ("new york", &["new york", USA]),
    ("ohio", &["ohio", USA]),
    ("oklahoma", &["oklahoma", USA]),
    ("oregon", &["oregon", USA]),
    ("pennsylvania", &["pennsylvania", USA]),
    ("rhode island", &["rhode island", USA]),
    ("south carolina", &["south carolina", USA]),
    ("south dakota", &["south dakota", USA]),
    ("tennessee", &["tennessee", USA]),
    ("texas", &["texas", USA]),
    ("utah", &["utah", USA]),
    ("virginia", &["virginia", USA]),
    ("vermont", &["vermont", USA]),
    ("washington", &["washington", USA]),
    ("wisconsin", &["wisconsin", USA]),
    ("west virginia", &["west virginia", USA]),
    ("wyoming", &["wyoming", USA]),
    ("w virginia", &["west virginia", USA]),
    // Translations and historical names
    ("danmark", &["denmark"]),
    ("deutschland", &["germany"]),
    ("pommern", &["pomerania"]),
    ("preuãÿen", &["prussia"]),
    ("preussen", &["prussia"]),
    ("westpreussen", &["west prussia"]),
    ("vorpommern", &["western pomerania"]),
    ("russian federation", &["russia"]),
    ("united states of america", &[USA]),
    ("united states", &[USA]),
];

static ALIASES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| ALIAS_TABLE.iter().copied().collect());

/// Canonical replacements for `key`, or `None` if the key is not an alias.
///
/// `Some(&[])` means the key is noise and should be discarded.
pub fn lookup(key: &str) -> Option<&'static [&'static str]> {
    ALIASES.get(key).copied()
}

/// All `(key, replacements)` pairs in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    ALIAS_TABLE.iter().copied()
}

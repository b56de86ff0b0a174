// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ancestral surname and location clustering for DNA match exports.
//!
//! Family Tree DNA's Family Finder lets every match type in their ancestral
//! surnames by hand. This crate turns that free text into structured sets of
//! surnames and locations per cousin and counts how many cousins share each
//! one, so common ancestry clusters stand out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│ normalize/   │────▶│ ancestry.rs  │────▶│ ancestries/ │
//! │ (words,     │     │ (alias table)│     │ (Ancestry::  │     │ (filter,    │
//! │  tokens)    │     │              │     │  parse)      │     │  unite, ∩)  │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!                                                                      │
//!        ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ▼
//!        │  input.rs   │────▶│ analysis.rs  │◀────│ frequency.rs │◀────┘
//!        │ (CSV column)│     │ (Report)     │     │ (ranking)    │
//!        └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Everything from `tokenize` to `frequency` is pure and performs no I/O.
//!
//! # Usage
//!
//! ```
//! use kindred::Ancestries;
//!
//! let cousins = Ancestries::from_lines([
//!     "Smith (Berlin, Germany)/Jones",
//!     "Weber (Deutschland)",
//!     "Miller (TX)",
//! ])
//! .unwrap();
//!
//! let countries = cousins
//!     .frequencies_of_words(["Germany", "USA"])
//!     .sorted_descending();
//! assert_eq!(countries.as_slice()[0].name, "Germany");
//! assert_eq!(countries.as_slice()[0].count, 2);
//! ```

pub mod analysis;
mod ancestries;
mod ancestry;
mod error;
mod frequency;
pub mod input;
pub mod normalize;
pub mod places;
pub mod tokenize;

pub use ancestries::{Ancestries, AncestriesList};
pub use ancestry::Ancestry;
pub use error::{Error, Result};
pub use frequency::{Field, Frequencies, Frequency};
pub use normalize::normalize;
pub use tokenize::{extract_tokens, extract_words};

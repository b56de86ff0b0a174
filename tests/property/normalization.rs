//! Alias normalization properties.

use kindred::normalize;
use kindred::normalize::aliases;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Tokens built from plain words and alias keys.
fn token_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "berlin", "cork", "krakow", "dallas", "county", "east", "tx", "ohio", "uk",
            "deutschland", "gt", "amp", "ga", "wales",
        ]),
        1..4,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    /// Normalizing a normalized set changes nothing.
    #[test]
    fn prop_normalize_idempotent(tokens in prop::collection::vec(token_strategy(), 0..6)) {
        let once = normalize(&tokens);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    /// Output strings respect the minimum length.
    #[test]
    fn prop_normalize_min_length(tokens in prop::collection::vec(token_strategy(), 0..6)) {
        for clean in normalize(&tokens) {
            prop_assert!(clean.len() >= 2, "short output {:?}", clean);
        }
    }

    /// Normalization distributes over union of its input.
    #[test]
    fn prop_normalize_union(
        left in prop::collection::vec(token_strategy(), 0..4),
        right in prop::collection::vec(token_strategy(), 0..4),
    ) {
        let mut joined = normalize(&left);
        joined.extend(normalize(&right));
        let all: Vec<&String> = left.iter().chain(&right).collect();
        prop_assert_eq!(normalize(all), joined);
    }
}

#[test]
fn every_alias_key_normalizes_to_its_replacements() {
    for (key, replacements) in aliases::entries() {
        let expected: BTreeSet<String> = replacements.iter().map(|s| s.to_string()).collect();
        assert_eq!(normalize([key]), expected, "alias {key:?}");
    }
}

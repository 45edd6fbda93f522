//! Search-query normalization.
//!
//! Queries are assembled from whatever tags or filenames the caller has, and
//! the JioSaavn search endpoint is picky: stray punctuation like "!" or "-"
//! can turn an otherwise exact artist/title match into zero results, and
//! medium markers like "CD1" or "disc 2" describe the rip rather than the
//! release. Two cleanup passes fix both before the query goes out.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of non-word characters. `\W` is Unicode-aware, so letters
/// outside ASCII (and combining marks) survive the pass.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("static pattern"));

/// Medium markers: "CD1", "cd 3", "disc 2", "DISC2", ...
static MEDIUM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:CD|disc)\s*\d+").expect("static pattern"));

/// Runs of two or more whitespace characters, left behind by marker removal.
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("static pattern"));

/// Normalize a free-text search query before sending it to the catalog.
///
/// Replaces every run of non-word characters with a single space, removes
/// medium markers, and collapses any doubled whitespace the removal leaves
/// behind. The result is not trimmed; a trailing separator run stays as a
/// single trailing space.
pub fn normalize_query(query: &str) -> String {
    let cleaned = NON_WORD.replace_all(query, " ");
    let cleaned = MEDIUM_MARKER.replace_all(&cleaned, "");
    MULTI_SPACE.replace_all(&cleaned, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_punctuation_runs_become_single_spaces() {
        assert_eq!(
            normalize_query("Abbey Road (Remastered)!!"),
            "Abbey Road Remastered "
        );
    }

    #[test]
    fn test_removes_cd_marker() {
        assert_eq!(normalize_query("Greatest Hits CD1"), "Greatest Hits ");
    }

    #[test]
    fn test_removes_disc_marker_with_space() {
        assert_eq!(normalize_query("Greatest Hits disc 2"), "Greatest Hits ");
    }

    #[test]
    fn test_medium_marker_is_case_insensitive() {
        assert_eq!(normalize_query("Live Set cd 3"), "Live Set ");
        assert_eq!(normalize_query("Live Set DISC2"), "Live Set ");
    }

    #[test]
    fn test_marker_removal_collapses_leftover_gap() {
        assert_eq!(normalize_query("The Wall CD1 Remaster"), "The Wall Remaster");
    }

    #[test]
    fn test_disc_needs_a_number_to_be_removed() {
        // "Disco" and "Disco 2000" are titles, not medium markers
        assert_eq!(normalize_query("Disco 2000"), "Disco 2000");
    }

    #[test]
    fn test_marker_inside_a_word_survives() {
        assert_eq!(normalize_query("ACDC 1"), "ACDC 1");
    }

    #[test]
    fn test_keeps_non_ascii_word_characters() {
        assert_eq!(normalize_query("Café Tacvba – Ré"), "Café Tacvba Ré");
        assert_eq!(normalize_query("Tum Hi Ho (आशिक़ी 2)"), "Tum Hi Ho आशिक़ी 2 ");
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        assert_eq!(normalize_query("some_rip_tag"), "some_rip_tag");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(normalize_query(""), "");
    }

    proptest! {
        #[test]
        fn prop_no_punctuation_survives(query in ".*") {
            let out = normalize_query(&query);
            // Underscore is a word character; everything else from the ASCII
            // punctuation range must be gone.
            prop_assert!(
                out.chars().all(|c| c == '_' || !c.is_ascii_punctuation()),
                "punctuation left in {out:?}"
            );
        }

        #[test]
        fn prop_no_doubled_spaces(query in ".*") {
            let out = normalize_query(&query);
            prop_assert!(!out.contains("  "), "doubled space in {out:?}");
        }
    }
}

//! Removal of the `undefined` sentinel.
//!
//! Some client/model combinations leak the literal word `undefined` into
//! generated text. It is removed wherever it appears, in any casing.

use regex::Regex;
use std::sync::LazyLock;

/// The leaked token.
pub const SENTINEL: &str = "undefined";

// Horizontal whitespace only: newlines survive so the line filter still sees
// line structure.
static SENTINEL_WITH_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^\S\n]*undefined[^\S\n]*").expect("valid sentinel regex"));

static SENTINEL_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)undefined").expect("valid sentinel regex"));

/// Replace every occurrence (with adjacent spaces/tabs) by a single space,
/// then trim.
///
/// Idempotent: the inserted space means a removal can never splice two
/// fragments into a new occurrence, so a second run only re-trims.
pub fn strip_sentinel(text: &str) -> String {
    SENTINEL_WITH_PADDING
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Case-insensitive presence check.
pub fn contains_sentinel(text: &str) -> bool {
    SENTINEL_ANYWHERE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_collapses_surrounding_spaces() {
        assert_eq!(strip_sentinel("alpha undefined beta"), "alpha beta");
        assert_eq!(strip_sentinel("alpha   UNDEFINED\tbeta"), "alpha beta");
        assert_eq!(strip_sentinel("undefined leading"), "leading");
        assert_eq!(strip_sentinel("trailing Undefined"), "trailing");
    }

    #[test]
    fn test_strip_keeps_newlines() {
        assert_eq!(strip_sentinel("one\nundefined\ntwo"), "one\n \ntwo");
    }

    #[test]
    fn test_strip_inside_word() {
        assert_eq!(strip_sentinel("preundefinedpost"), "pre post");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let samples = [
            "",
            "plain text",
            "undefined",
            "a undefined b undefined c",
            "unundefineddefined",
            "UNDEFINEDundefined",
            "  spaced  \n undefined \n  lines  ",
            "multi\n\nparagraph undefined\n\ntext",
        ];
        for s in samples {
            let once = strip_sentinel(s);
            assert_eq!(strip_sentinel(&once), once, "input {s:?}");
            assert!(!contains_sentinel(&once), "input {s:?}");
        }
    }

    #[test]
    fn test_contains_sentinel() {
        assert!(contains_sentinel("is UnDeFiNeD here"));
        assert!(!contains_sentinel("defined"));
    }
}

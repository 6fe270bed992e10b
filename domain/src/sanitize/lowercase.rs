//! Post-processing for the `LOWERCASE` register.

use regex::Regex;
use std::sync::LazyLock;

/// Phrases deleted outright from lowercase output (whole words, any case).
pub const CORPORATE_JARGON: &[&str] = &[
    "synergy",
    "circling back",
    "delighted to",
    "leverage",
    "paradigm",
    "disrupt",
    "innovative solution",
    "think outside the box",
    "value proposition",
    "streamline",
    "optimize",
    "scalable",
    "circle back",
    "touch base",
    "deep dive",
    "game changer",
    "win-win",
];

// Words of a phrase may be separated by any whitespace run.
static JARGON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CORPORATE_JARGON
        .iter()
        .map(|phrase| {
            let words: Vec<String> = phrase.split(' ').map(regex::escape).collect();
            Regex::new(&format!(r"(?i)\b{}\b", words.join(r"\s+"))).expect("valid jargon regex")
        })
        .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static SPACE_BEFORE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\.").expect("valid period regex"));

static REPEATED_PERIODS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:\s*\.)+").expect("valid period regex"));

/// Delete every jargon phrase until none is left.
///
/// A single sweep is not enough: deleting one phrase can join the halves of
/// another (`"deep deep dive dive"`).
pub fn strip_jargon(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let mut next = current.clone();
        for pattern in JARGON_PATTERNS.iter() {
            next = pattern.replace_all(&next, "").into_owned();
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Lowercase, strip jargon, collapse whitespace, tidy periods.
pub fn lowercase_cleanup(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_jargon(&lowered);
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let collapsed = collapsed.trim();
    let tidy = SPACE_BEFORE_PERIOD.replace_all(collapsed, ".");
    REPEATED_PERIODS.replace_all(&tidy, ".").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventeen_phrases() {
        assert_eq!(CORPORATE_JARGON.len(), 17);
    }

    #[test]
    fn test_output_has_no_uppercase() {
        let out = lowercase_cleanup("Hello World. This Is LOUD and Ünïcode Ä.");
        assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
        assert_eq!(out, "hello world. this is loud and ünïcode ä.");
    }

    #[test]
    fn test_every_phrase_removed() {
        for phrase in CORPORATE_JARGON {
            let input = format!("We should {} soon. Then we ship.", phrase.to_uppercase());
            let out = lowercase_cleanup(&input);
            for p in CORPORATE_JARGON {
                assert!(!out.contains(p), "{p:?} survived in {out:?}");
            }
            assert_eq!(out, "we should soon. then we ship.");
        }
    }

    #[test]
    fn test_all_phrases_together() {
        let input = CORPORATE_JARGON.join(" and ") + ".";
        let out = lowercase_cleanup(&input);
        for p in CORPORATE_JARGON {
            assert!(!out.contains(p), "{p:?} survived in {out:?}");
        }
    }

    #[test]
    fn test_phrase_across_line_break() {
        assert_eq!(lowercase_cleanup("let's touch\nbase later"), "let's later");
    }

    #[test]
    fn test_nested_phrase_removed() {
        assert_eq!(strip_jargon("deep deep dive dive"), "");
        assert_eq!(lowercase_cleanup("a deep deep dive dive b"), "a b");
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(lowercase_cleanup("synergyless prose"), "synergyless prose");
    }

    #[test]
    fn test_period_cleanup() {
        assert_eq!(lowercase_cleanup("done .  next .. last. . end..."), "done. next. last. end.");
    }

    #[test]
    fn test_removed_phrase_before_period() {
        assert_eq!(lowercase_cleanup("We must Leverage."), "we must.");
    }
}

//! Cleanup applied to every response regardless of mode.

use super::sentinel::strip_sentinel;
use crate::prompt::OUTPUT_CUE;
use regex::Regex;
use std::sync::LazyLock;

/// Phrases that mark a line as commentary about the edit rather than the edit.
///
/// Matched case-insensitively as substrings of the trimmed line.
pub const META_MARKERS: &[&str] = &[
    "i made the following",
    "changes to refine",
    "here are the changes",
    "refined version:",
    "original text:",
];

static ECHO_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(OUTPUT_CUE))).expect("valid cue regex")
});

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid list regex"));

/// Keep only what follows the last echoed output cue.
///
/// Returns the input unchanged when the cue is absent or nothing usable
/// follows it.
pub fn strip_echo_cue(text: &str) -> String {
    if !ECHO_CUE.is_match(text) {
        return text.to_string();
    }
    match ECHO_CUE.split(text).last().map(str::trim) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => text.to_string(),
    }
}

fn is_meta_line(line: &str) -> bool {
    let lower = line.trim().to_lowercase();
    lower.is_empty()
        || lower == "undefined"
        || lower.starts_with('*')
        || lower.starts_with('-')
        || NUMBERED_ITEM.is_match(&lower)
        || META_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Drop blank, bulleted, numbered and commentary lines; rejoin with `\n`.
pub fn drop_meta_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !is_meta_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// The mode-independent passes, in order: trim, echo cue, sentinel,
/// line filter, sentinel again.
pub fn baseline_cleanup(raw: &str) -> String {
    let text = raw.trim();
    let text = strip_echo_cue(text);
    let text = strip_sentinel(&text);
    let text = drop_meta_lines(&text);
    strip_sentinel(&text)
}

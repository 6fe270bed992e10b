//! Heuristics for spotting mangled model output.
//!
//! The casing checks are deliberately crude. A lowercase letter followed by
//! an uppercase one is what dropped characters and spliced tokens tend to
//! leave behind (`"teHe"`, `"wOrd"`), but the same pattern also occurs in
//! legitimate text: `iPhone`, `McDonald`, `JavaScript`. The triggers are kept
//! exactly as they are so that any change to them is a visible decision.

use super::sentinel::contains_sentinel;
use crate::core::string::char_len;
use regex::Regex;
use std::sync::LazyLock;

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][A-Z]").expect("valid casing regex"));

static UPPER_LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z][A-Z]").expect("valid casing regex"));

/// Which heuristics fired for a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorruptionReport {
    /// `[a-z][A-Z]` or `[A-Z][a-z][A-Z]` somewhere in the text
    pub casing_anomaly: bool,
    /// the `undefined` sentinel is still present
    pub sentinel_present: bool,
    /// output has fewer than half as many characters as the input
    pub too_short: bool,
}

impl CorruptionReport {
    /// True when any heuristic fired.
    pub fn is_corrupted(&self) -> bool {
        self.casing_anomaly || self.sentinel_present || self.too_short
    }
}

/// Run every heuristic over `output`, comparing its length with `input`.
pub fn inspect(output: &str, input: &str) -> CorruptionReport {
    CorruptionReport {
        casing_anomaly: LOWER_UPPER.is_match(output) || UPPER_LOWER_UPPER.is_match(output),
        sentinel_present: contains_sentinel(output),
        too_short: char_len(output) * 2 < char_len(input),
    }
}

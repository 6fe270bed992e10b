//! Ordering of the sanitization passes and the final accept/reject call.

use super::baseline::baseline_cleanup;
use super::corruption::{CorruptionReport, inspect};
use super::lowercase::lowercase_cleanup;
use super::sentinel::strip_sentinel;
use crate::core::string::char_len;
use crate::mode::Mode;
use thiserror::Error;

/// Shortest output, in characters, that is ever returned.
pub const MIN_OUTPUT_CHARS: usize = 10;

/// Why sanitized output was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptionReason {
    /// Fewer than [`MIN_OUTPUT_CHARS`] characters left after cleanup
    Degenerate,
    /// Less than half the length of the input
    TooShort,
}

/// Output rejected by the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Response appears corrupted or empty. Please try again.")]
pub struct CorruptedOutput {
    pub reason: CorruptionReason,
    pub report: CorruptionReport,
}

/// Accepted output plus the heuristics that fired on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    pub report: CorruptionReport,
}

/// Run every pass over `raw` for a request in `mode` with original `input`.
///
/// A casing anomaly on its own does not reject: callers get it back in
/// [`Sanitized::report`] and decide whether to log it.
pub fn sanitize(raw: &str, mode: Mode, input: &str) -> Result<Sanitized, CorruptedOutput> {
    let mut text = baseline_cleanup(raw);

    if mode.is_lowercase() {
        text = lowercase_cleanup(&text);
    }

    let report = inspect(&text, input);
    if report.is_corrupted() && report.sentinel_present {
        text = strip_sentinel(&text);
    }

    if char_len(&text) < MIN_OUTPUT_CHARS {
        return Err(CorruptedOutput {
            reason: CorruptionReason::Degenerate,
            report,
        });
    }

    if report.too_short {
        return Err(CorruptedOutput {
            reason: CorruptionReason::TooShort,
            report,
        });
    }

    Ok(Sanitized { text, report })
}

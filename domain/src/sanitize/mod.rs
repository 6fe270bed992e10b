//! Post-processing of raw model output.
//!
//! Model responses are untrusted text. Before anything reaches a client it
//! goes through a fixed sequence of passes:
//!
//! ```text
//! raw ─▶ baseline ─▶ [lowercase register] ─▶ corruption inspection ─▶ final guard
//! ```
//!
//! | Module | Pass |
//! |--------|------|
//! | [`sentinel`] | removal of the literal `undefined` token |
//! | [`baseline`] | echo-cue split, meta-commentary line filter |
//! | [`lowercase`] | lowercasing, corporate jargon removal, punctuation tidy |
//! | [`corruption`] | casing / sentinel / length heuristics |
//! | [`pipeline`] | ordering of the passes and the accept/reject decision |
//!
//! Every function here is pure: no I/O, no shared state.

pub mod baseline;
pub mod corruption;
pub mod lowercase;
pub mod pipeline;
pub mod sentinel;

pub use baseline::{META_MARKERS, baseline_cleanup, drop_meta_lines, strip_echo_cue};
pub use corruption::{CorruptionReport, inspect};
pub use lowercase::{CORPORATE_JARGON, lowercase_cleanup, strip_jargon};
pub use pipeline::{CorruptedOutput, CorruptionReason, MIN_OUTPUT_CHARS, Sanitized, sanitize};
pub use sentinel::{SENTINEL, contains_sentinel, strip_sentinel};

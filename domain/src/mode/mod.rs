//! Rewriting modes and their prompt instructions.
//!
//! - [`Mode`] — the closed set of registers the workspace offers
//! - [`ModeRegistry`] — symbolic key → instruction lookup with Standard fallback

pub mod registry;

pub use registry::{Mode, ModeRegistry};

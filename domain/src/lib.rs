//! Domain layer for ctrl-build
//!
//! This crate contains the reconstruct pipeline's pure logic: the mode
//! registry, prompt assembly, and the sanitization passes applied to model
//! output. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Modes
//!
//! A [`Mode`] is a register (Academic, Executive, LOWERCASE, ...). Its
//! instruction is embedded in the prompt; unknown keys resolve to Standard.
//!
//! ## Sanitization
//!
//! Model output is untrusted. [`sanitize()`] strips echoed cues, commentary
//! lines and the leaked `undefined` token, applies register-specific cleanup,
//! and refuses output that looks mangled.

pub mod core;
pub mod generation;
pub mod mode;
pub mod prompt;
pub mod refinement;
pub mod sanitize;
pub mod usage;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use generation::{Candidate, ExtractionFailure, FinishReason, GenerationResponse};
pub use mode::{Mode, ModeRegistry};
pub use prompt::{OUTPUT_CUE, PromptTemplate};
pub use refinement::{
    AuthenticatedUser, HistoryId, HistoryRecord, RefinementRequest, RefinementResult,
};
pub use sanitize::{CorruptedOutput, CorruptionReason, CorruptionReport, Sanitized, sanitize};
pub use usage::{ActivityDay, UsageSummary, UsageTotals};

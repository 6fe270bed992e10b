//! In-process usage counters.

pub mod words_refined;

pub use words_refined::{DEFAULT_WORDS_REFINED_SEED, WordsRefinedCounter};

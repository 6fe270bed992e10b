//! Prompt templates for the reconstruct pipeline

pub mod template;

pub use template::{OUTPUT_CUE, PromptTemplate};

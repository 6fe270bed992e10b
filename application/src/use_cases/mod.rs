//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod reconstruct;
pub mod restore_history;
pub mod submit_refinement;
pub mod user_stats;

//! Route handlers.

pub mod health;
pub mod reconstruct;
pub mod restore;
pub mod stats;

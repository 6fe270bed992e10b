//! Refinement request/result value objects and the history row they produce.

pub mod entities;

pub use entities::{AuthenticatedUser, HistoryId, HistoryRecord, RefinementRequest, RefinementResult};

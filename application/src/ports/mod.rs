//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod history_store;
pub mod llm_gateway;
pub mod refinement_api;
pub mod session_resolver;
pub mod stats_store;

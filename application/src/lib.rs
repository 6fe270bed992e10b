//! Application layer for ctrl-build
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod stats;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    history_store::{HistoryStore, NoHistoryStore, StoreError},
    llm_gateway::{GatewayError, LlmGateway},
    refinement_api::{ClientError, ReconstructOutcome, RefinementApi},
    session_resolver::{AnonymousSessions, AuthError, SessionResolver},
    stats_store::{NoStatsStore, StatsStore},
};
pub use stats::{DEFAULT_WORDS_REFINED_SEED, WordsRefinedCounter};
pub use use_cases::reconstruct::{ReconstructError, ReconstructInput, ReconstructUseCase};
pub use use_cases::restore_history::{RestoreError, RestoreHistoryUseCase};
pub use use_cases::submit_refinement::{SubmitError, SubmitRefinementUseCase};
pub use use_cases::user_stats::{StatsError, UserStatsUseCase};

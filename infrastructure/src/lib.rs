//! Infrastructure layer for ctrl-build
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod client;
pub mod config;
pub mod providers;
pub mod supabase;

// Re-export commonly used types
pub use client::HttpRefinementApi;
pub use config::{
    ConfigIssue, ConfigLoader, FileClientConfig, FileConfig, FileLoggingConfig, FileModelConfig,
    FileServerConfig, FileStatsConfig, FileStoreConfig, Severity,
};
pub use providers::GeminiGateway;
pub use supabase::{
    SupabaseClient, SupabaseHistoryStore, SupabaseSessionResolver, SupabaseStatsStore,
};

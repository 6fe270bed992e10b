//! Presentation layer for ctrl-build
//!
//! This crate contains the HTTP API, CLI definitions, and the console
//! workspace driver's output helpers.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, RefineArgs, ServeArgs};
pub use http::{ApiError, AppState, api_router, cors_layer, serve};
pub use output::{ConsoleOutput, Pacing, Typewriter, WaitingIndicator};

//! Configuration file loading for ctrl-build
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `CTRL_BUILD_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./ctrl-build.toml` or `./.ctrl-build.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ctrl-build/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileClientConfig, FileConfig, FileLoggingConfig, FileModelConfig,
    FileServerConfig, FileStatsConfig, FileStoreConfig, Severity,
};
pub use loader::ConfigLoader;

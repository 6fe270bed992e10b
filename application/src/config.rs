//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the bound on a single model call.

use reconstruct_domain::Model;
use std::time::Duration;

/// Default bound on one generation call.
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like the model in use and the
/// timeout for its API calls.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Model every reconstruct request is sent to.
    pub model: Model,
    /// Maximum time to wait for a model response before timing out.
    pub timeout: Option<Duration>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            timeout: Some(Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS)),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None` or zero, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}

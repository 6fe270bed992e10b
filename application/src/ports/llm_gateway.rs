//! LLM Gateway port
//!
//! Defines the interface for calling a generation model.

use async_trait::async_trait;
use reconstruct_domain::{GenerationResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("No response from generation model")]
    NoResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for generation model calls
///
/// This port defines how the application layer reaches a model provider.
/// Implementations (adapters) live in the infrastructure layer.
///
/// One call, one prompt, one response: there is no session state and no
/// retry inside the port.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` to `model` and return the provider's response.
    ///
    /// A transport-level success with no response object must be reported
    /// as [`GatewayError::NoResponse`].
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
    ) -> Result<GenerationResponse, GatewayError>;
}

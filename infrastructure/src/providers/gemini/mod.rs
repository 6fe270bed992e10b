//! Google Gemini provider
//!
//! Talks to the Generative Language REST API (`models/{model}:generateContent`)
//! and converts its payloads into the domain [`GenerationResponse`].
//!
//! [`GenerationResponse`]: reconstruct_domain::GenerationResponse

mod gateway;
mod types;

pub use gateway::{DEFAULT_BASE_URL, GeminiGateway};

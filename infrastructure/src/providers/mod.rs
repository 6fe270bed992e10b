//! Generation model providers.

pub mod gemini;

pub use gemini::GeminiGateway;

//! Provider-neutral shape of a generation model response.

pub mod response;

pub use response::{Candidate, ExtractionFailure, FinishReason, GenerationResponse};

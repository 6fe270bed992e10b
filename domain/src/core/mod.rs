//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — generation models the reconstruct pipeline can call
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — UTF-8 safe text helpers

pub mod error;
pub mod model;
pub mod string;

//! HTTP client for a reconstruct server.

mod http;

pub use http::HttpRefinementApi;

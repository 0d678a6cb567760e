//! HTTP client module with error classification.

mod client;

pub use client::{HttpClient, SIMULATED_NETWORK_ERROR};

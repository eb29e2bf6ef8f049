//! Network operations
//!
//! HTTP client and request cancellation utilities.

pub mod cancel;
pub mod client;

// Re-export commonly used types
pub use cancel::{RequestGeneration, RequestTicket};
pub use client::HttpClient;

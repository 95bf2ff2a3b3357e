//! # Application Layer Network Protocols
//!
//! Protocols layered on the core network traits. Each works with any type
//! implementing [`Connection`](crate::network::Connection) and keeps its
//! state local to a single call.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 GET client with secure-then-plain fallback

/// HTTP client implementation.
///
/// Fetches a small text body over HTTP/1.1, decoding `Content-Length`,
/// chunked and close-delimited responses, and retrying across transport modes.
pub mod http;

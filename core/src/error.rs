//! Error types for the product catalog client.
//!
//! # Design
//! Status codes are not interpreted: whatever body the server returns is
//! decoded as the expected type, so a 4xx/5xx response only fails if its
//! body does not decode. Failures are reported as they occur, without
//! classification.

use thiserror::Error;

/// Errors returned by `ProductClient` and `ProductService`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The base URL cannot carry a product path.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request did not produce a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

use http::StatusCode;
use thiserror::Error;

use crate::auth::AuthLevel;
use crate::endpoint::AccessMode;

/// Error types for the Bbox API client.
#[derive(Error, Debug)]
pub enum BboxError {
    /// Invalid client configuration or argument, detected before any request
    /// is sent.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// The access gate refused the call because the session holds no token.
    #[error("Authentication required: {required} level needed in {mode} mode but no session is open")]
    AuthenticationRequired {
        /// Level the endpoint requires in the current access mode.
        required: AuthLevel,
        /// Access mode the client was built for.
        mode: AccessMode,
    },

    /// The login exchange returned something the client cannot use.
    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    /// Transport failure (DNS, connection refused, timeout, TLS).
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A typed accessor received a non-success status.
    #[error("API error: status {status}: {body}")]
    ApiError {
        /// Status returned by the router.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The response JSON does not have the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type for Bbox API operations.
pub type BboxResult<T> = Result<T, BboxError>;

//! Cart service errors.

use thiserror::Error;

/// Errors that can occur when talking to the remote cart service.
#[derive(Debug, Error)]
pub enum CartServiceError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected response from cart service: {0}")]
    UnexpectedResponse(String),

    /// The configured origin cannot carry an API path.
    #[error("invalid cart service origin: {0}")]
    InvalidOrigin(String),
}

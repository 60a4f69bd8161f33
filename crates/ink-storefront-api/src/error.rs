//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Storefront API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered with a GraphQL error.
    #[error("Storefront API error: {0}")]
    Backend(String),

    /// Failed to decode the response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A successful response carried no data for the operation.
    #[error("Response contained no data for {0}")]
    MissingData(&'static str),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

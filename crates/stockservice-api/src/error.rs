//! Error types for the stock-service API client.

use std::fmt;

/// Result type alias for stock-service API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stock-service API client.
#[derive(Debug)]
pub enum Error {
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON serialization/deserialization error
    Json(serde_json::Error),
    /// API returned an error response
    Api(ApiError),
    /// Invalid parameter provided
    InvalidParameter(String),
    /// Connection closed unexpectedly
    ConnectionClosed,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP error: {e}"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
            Error::Api(e) => write!(f, "API error: {e}"),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Error::ConnectionClosed => write!(f, "Connection closed unexpectedly"),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

/// API error returned by stock-service endpoints.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status or service error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Check if this error came from a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Check if this is a server-side failure.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

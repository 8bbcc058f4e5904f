//! HTTP-specific error types for the Orderchamp API SDK.
//!
//! - [`TransportError`]: the request never produced a response (connection,
//!   TLS or timeout failure)
//! - [`HttpResponseError`]: a non-2xx response from the API
//! - [`InvalidResponseError`]: a 2xx response whose body could not be used
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use orderchamp_api::{HttpError, OrderchampError};
//!
//! match client.graphql("query { me { id } }", None, None).await {
//!     Ok(body) => println!("{body}"),
//!     Err(OrderchampError::Remote(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(OrderchampError::Remote(e)) => println!("Remote failure: {e}"),
//!     Err(e) => println!("Not sent: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request could not be completed.
///
/// Carries the message of the underlying transport failure.
#[derive(Debug, Error)]
#[error("Network error: {message}")]
pub struct TransportError {
    /// Description of the failure.
    pub message: String,
    /// `true` if the request hit the configured timeout.
    pub timed_out: bool,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
            source: None,
        }
    }

    /// Creates a transport error for a request that timed out.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            timed_out: true,
            ..Self::new(message)
        }
    }

    /// Attaches the underlying error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        let base = if error.is_timeout() {
            Self::timeout(message)
        } else {
            Self::new(message)
        };
        base.with_source(error)
    }
}

/// Error returned when the API responds with a non-2xx status.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error":"invalid_client"}"#.to_string(),
/// };
/// assert_eq!(error.to_string(), r#"Request failed with status 401: {"error":"invalid_client"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body.
    pub message: String,
}

/// Error returned when a successful response has an unusable body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid response with status {code}: {message}")]
pub struct InvalidResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Why the body was rejected.
    pub message: String,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body was malformed or incomplete.
    #[error(transparent)]
    InvalidResponse(#[from] InvalidResponseError),

    /// Network or connection error.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidResponse(e) => Some(e.code),
            Self::Transport(_) => None,
        }
    }
}

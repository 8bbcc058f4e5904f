//! The pluggable HTTP transport contract.
//!
//! The SDK never talks to the network directly. Every request goes through an
//! [`HttpTransport`], which makes the network layer replaceable in tests and
//! lets applications bring their own HTTP stack.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidResponseError, TransportError};
use crate::config::{OrderchampConfig, TlsVerification};

/// HTTP methods used by the SDK.
///
/// Every Orderchamp endpoint the SDK calls takes a JSON `POST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum HttpMethod {
    /// HTTP POST.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A request handed to an [`HttpTransport`].
///
/// Carries the timeout and TLS mode from the configuration so that the
/// transport can apply them per request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
    /// Request timeout. [`Duration::ZERO`] means no timeout.
    pub timeout: Duration,
    /// TLS verification mode.
    pub tls: TlsVerification,
}

impl HttpRequest {
    /// Creates a JSON `POST` request with the default SDK headers
    /// (`Accept: application/json` and the configured User-Agent).
    #[must_use]
    pub fn post_json(url: impl Into<String>, body: serde_json::Value, config: &OrderchampConfig) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), config.user_agent());

        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers,
            body: Some(body),
            timeout: config.timeout(),
            tls: config.verify().clone(),
        }
    }

    /// Adds or replaces a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A response returned by an [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, with lowercase names.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// HTTP transport abstraction.
///
/// Implementations send the request once. They must not retry and they report
/// non-2xx responses as `Ok`; status handling happens in [`send_json`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the raw response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Sends a request and decodes the JSON response body into `T`.
///
/// # Errors
///
/// - [`HttpError::Transport`] if the transport fails
/// - [`HttpError::Response`] for a non-2xx status
/// - [`HttpError::InvalidResponse`] if the body is not valid JSON or does not
///   match `T`
pub async fn send_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    request: HttpRequest,
) -> Result<T, HttpError> {
    tracing::debug!(method = %request.method, url = %request.url, "Sending Orderchamp API request");

    let response = transport.send(request).await?;

    if !response.is_ok() {
        tracing::warn!(status = response.status, "Orderchamp API request failed");
        return Err(HttpResponseError {
            code: response.status,
            message: response.body,
        }
        .into());
    }

    serde_json::from_str(&response.body).map_err(|e| {
        InvalidResponseError {
            code: response.status,
            message: format!("Failed to parse response body: {e}"),
        }
        .into()
    })
}

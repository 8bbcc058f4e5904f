//! HTTP transport and GraphQL execution.
//!
//! # Overview
//!
//! - [`HttpTransport`]: the pluggable transport contract
//! - [`ReqwestTransport`]: the default `reqwest` implementation
//! - [`HttpRequest`] / [`HttpResponse`]: what crosses the transport boundary
//! - [`send_json`]: dispatch plus status and JSON handling shared by all endpoints
//! - [`graphql::execute`] and [`GraphqlRequest`]: the GraphQL executor
//! - [`HttpError`]: the remote failure kind
//!
//! # Custom Transports
//!
//! ```rust
//! use async_trait::async_trait;
//! use orderchamp_api::clients::{HttpRequest, HttpResponse, HttpTransport, TransportError};
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl HttpTransport for Offline {
//!     async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
//!         Err(TransportError::new(format!("offline, cannot reach {}", request.url)))
//!     }
//! }
//! ```
//!
//! The SDK performs no retries. A failed request is reported once and the
//! caller decides what to do next.

mod errors;
pub mod graphql;
mod reqwest_transport;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidResponseError, TransportError};
pub use graphql::GraphqlRequest;
pub use reqwest_transport::ReqwestTransport;
pub use transport::{send_json, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

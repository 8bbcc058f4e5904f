//! # Orderchamp API Rust SDK
//!
//! A Rust SDK for the Orderchamp API, providing type-safe configuration,
//! OAuth authentication, HMAC signature verification and GraphQL execution
//! for Orderchamp apps.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Configuration via [`OrderchampConfig`] and [`OrderchampConfigBuilder`]
//! - OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - HMAC-SHA256 signing and constant-time verification via [`auth`]
//! - Authenticated GraphQL requests via [`clients::graphql`]
//! - A pluggable HTTP transport ([`clients::HttpTransport`]) with a `reqwest`
//!   default
//! - [`OrderchampClient`], which ties the above together and keeps the access
//!   token obtained from the token exchange
//!
//! ## Quick Start
//!
//! ```rust
//! use orderchamp_api::OrderchampConfig;
//!
//! let config = OrderchampConfig::builder()
//!     .client_id("your-client-id")
//!     .client_secret("your-client-secret")
//!     .add_version("my-app", "2.1.0")
//!     .build()
//!     .unwrap();
//!
//! assert!(config.user_agent().ends_with("my-app/2.1.0"));
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,no_run
//! use orderchamp_api::{OAuthState, OrderchampClient, OrderchampConfig, SignedParameters};
//!
//! # async fn run(callback_query: &str) -> Result<(), orderchamp_api::OrderchampError> {
//! let config = OrderchampConfig::builder()
//!     .client_id("your-client-id")
//!     .client_secret("your-client-secret")
//!     .build()?;
//! let client = OrderchampClient::new(config)?;
//!
//! // Step 1: send the user to Orderchamp
//! let state = OAuthState::random();
//! let url = client.authorization_url(["read", "write"], "https://app.example/cb", Some(state.as_ref()));
//!
//! // Step 2: on the redirect, exchange the signed parameters for a token
//! let params = SignedParameters::from_query_str(callback_query);
//! client.exchange_token(&params).await?;
//!
//! // Step 3: the stored token authenticates GraphQL calls
//! let response = client.graphql("{ me { id } }", None, None).await?;
//! # let _ = (url, response);
//! # Ok(())
//! # }
//! ```
//!
//! ## Webhook Verification
//!
//! ```rust
//! use orderchamp_api::{sign, verify_signature, OrderchampConfig};
//!
//! let config = OrderchampConfig::builder().shared_secret("webhook-secret").build().unwrap();
//!
//! let signature = sign(&config, r#"{"event":"order.created"}"#).unwrap();
//! assert!(verify_signature(&config, r#"{"event":"order.created"}"#, &signature).unwrap());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly
//! - **Fail fast**: missing credentials are reported before any network call
//! - **Mismatch is not an error**: verification returns `Ok(false)`
//! - **No automatic retries**: every failure is surfaced once
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod auth;
pub mod client;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::oauth::{
    authorization_url, exchange_token, AuthorizationRequest, OAuthState, TokenExchangeResult,
};
pub use auth::{sign, sign_parameters, verify_parameters, verify_signature, SignedParameters};
pub use client::OrderchampClient;
pub use clients::{GraphqlRequest, HttpError, HttpResponseError, InvalidResponseError, TransportError};
pub use config::{
    AccessToken, BaseUrl, ClientId, ClientSecret, ComponentVersions, ConfigOptions,
    OrderchampConfig, OrderchampConfigBuilder, SharedSecret, TlsVerification,
};
pub use error::{ConfigError, OrderchampError};

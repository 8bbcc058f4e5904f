//! OAuth 2.0 authorization code flow for Orderchamp apps.
//!
//! The flow has two steps:
//!
//! 1. **Authorization** ([`authorization_url`]): build the URL that sends the
//!    user to Orderchamp to approve the requested scopes.
//!
//! 2. **Token Exchange** ([`exchange_token`]): when Orderchamp redirects back
//!    to the app, verify the signed parameters and trade the `code` for an
//!    access token.
//!
//! # Security
//!
//! - Callback parameters are verified with HMAC-SHA256 before any network call
//! - Signatures are compared in constant time
//! - The default `state` is a timestamp and gives no CSRF protection; see
//!   [`OAuthState`]
//!
//! # Example
//!
//! ```rust,no_run
//! use orderchamp_api::{OAuthState, OrderchampConfig, SignedParameters};
//! use orderchamp_api::auth::oauth::{authorization_url, exchange_token};
//! use orderchamp_api::clients::ReqwestTransport;
//!
//! # async fn run(callback_query: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let config = OrderchampConfig::builder()
//!     .client_id("my-client-id")
//!     .client_secret("my-client-secret")
//!     .build()?;
//!
//! let state = OAuthState::random();
//! let url = authorization_url(&config, ["read"], "https://app.example/cb", Some(state.as_ref()));
//! // Redirect the user to `url`, then on the callback:
//!
//! let transport = ReqwestTransport::new()?;
//! let params = SignedParameters::from_query_str(callback_query);
//! let token = exchange_token(&config, &transport, &params).await?;
//! # let _ = (url, token);
//! # Ok(())
//! # }
//! ```

mod authorize;
mod state;
mod token;

pub use authorize::{authorization_url, AuthorizationRequest};
pub use state::OAuthState;
pub use token::{exchange_token, TokenExchangeResult};

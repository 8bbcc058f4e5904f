//! Authentication and signing for the Orderchamp API SDK.
//!
//! # Overview
//!
//! - [`oauth`]: the OAuth 2.0 authorization code flow
//! - [`SignedParameters`]: a parameter set received on a redirect or webhook
//! - [`sign`] / [`verify_signature`]: HMAC-SHA256 over arbitrary payloads
//! - [`verify_parameters`]: signature verification for a [`SignedParameters`]
//! - [`canonical`]: the form encoding every signed string is built with
//!
//! # Example
//!
//! ```rust
//! use orderchamp_api::{OrderchampConfig, SignedParameters};
//! use orderchamp_api::auth::verify_parameters;
//!
//! let config = OrderchampConfig::builder().client_secret("secret").build().unwrap();
//!
//! // Parameters without `account_id`, `timestamp` and `signature` never verify.
//! let params = SignedParameters::from_query_str("code=abc");
//! assert!(!verify_parameters(&config, &params).unwrap());
//! ```

pub mod canonical;
pub mod oauth;
mod parameters;
mod signature;

pub use parameters::{SignedParameters, REQUIRED_KEYS, SIGNATURE_KEY};
pub use signature::{
    compute_signature, constant_time_compare, sign, sign_parameters, verify_parameters,
    verify_signature,
};

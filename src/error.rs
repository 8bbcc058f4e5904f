//! Error types for the Orderchamp API SDK.
//!
//! Two error types live here:
//!
//! - [`ConfigError`]: a configuration value could not be represented at all
//!   (an unparseable URL, a negative timeout). Returned by the builder.
//! - [`OrderchampError`]: the error returned by every SDK operation.
//!
//! Missing credentials are never a [`ConfigError`]. A configuration without a
//! `client_secret` builds fine; the operation that needs the secret fails with
//! [`OrderchampError::MissingCredential`] when it is invoked.
//!
//! # Example
//!
//! ```rust
//! use orderchamp_api::{OrderchampConfig, OrderchampError, sign};
//!
//! let config = OrderchampConfig::builder().build().unwrap();
//! let result = sign(&config, "payload");
//! assert!(matches!(
//!     result,
//!     Err(OrderchampError::MissingCredential { field: "client_secret or shared_secret" })
//! ));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while building an [`OrderchampConfig`](crate::OrderchampConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A base URL could not be parsed.
    #[error("Invalid URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://www.orderchamp.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The timeout is negative, NaN or too large.
    #[error("Invalid timeout '{value}'. The timeout must be a finite, non-negative number of seconds.")]
    InvalidTimeout {
        /// The rejected value, formatted.
        value: String,
    },
}

/// Errors returned by SDK operations.
///
/// The variants map onto three failure kinds:
///
/// - configuration: [`MissingCredential`](Self::MissingCredential)
/// - signature: [`InvalidSignature`](Self::InvalidSignature) and
///   [`InvalidCallback`](Self::InvalidCallback)
/// - remote: [`Remote`](Self::Remote)
///
/// None of them are retried by the SDK.
#[derive(Debug, Error)]
pub enum OrderchampError {
    /// A credential required by the operation is not configured.
    #[error("No {field} was set.")]
    MissingCredential {
        /// The name of the missing option.
        field: &'static str,
    },

    /// The callback parameters failed signature verification.
    #[error("Invalid signature.")]
    InvalidSignature,

    /// The callback parameters are signed but unusable.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// What is wrong with the callback.
        reason: String,
    },

    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] HttpError),

    /// The configuration could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl OrderchampError {
    /// Returns `true` for the configuration failure kind.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential { .. } | Self::Config(_))
    }

    /// Returns `true` for the signature failure kind.
    #[must_use]
    pub const fn is_signature(&self) -> bool {
        matches!(self, Self::InvalidSignature | Self::InvalidCallback { .. })
    }

    /// Returns `true` for the remote failure kind.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

// Verify OrderchampError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderchampError>();
};

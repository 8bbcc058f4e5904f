//! Newtype wrappers for configuration values.
//!
//! Credentials are wrapped so that they cannot be mixed up with each other and
//! so that secrets never show up in `Debug` output. [`BaseUrl`] validates its
//! contents on construction.

use crate::error::ConfigError;
use std::fmt;

/// The OAuth client id issued to an Orderchamp app.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::ClientId;
///
/// let id = ClientId::new("my-client-id");
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Wraps a client id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

macro_rules! secret_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// Wraps a secret value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), "(*****)"))
            }
        }
    };
}

secret_newtype!(
    /// The OAuth client secret.
    ///
    /// Used for the token exchange and, when present, as the signing key.
    /// `Debug` output is masked:
    ///
    /// ```rust
    /// use orderchamp_api::ClientSecret;
    ///
    /// let secret = ClientSecret::new("my-secret");
    /// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
    /// ```
    ClientSecret
);

secret_newtype!(
    /// A shared secret used to verify webhooks when no client secret applies.
    SharedSecret
);

secret_newtype!(
    /// A bearer token for the GraphQL API.
    AccessToken
);

/// An absolute base URL such as `https://api.orderchamp.com/v1`.
///
/// The URL must have an alphabetic scheme and a non-empty host. Trailing
/// slashes are removed so that endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.orderchamp.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.orderchamp.com/v1");
/// assert_eq!(url.join("/graphql"), "https://api.orderchamp.com/v1/graphql");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parses a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self(url))
    }

    /// Appends an endpoint path, which must start with `/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

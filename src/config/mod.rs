//! Configuration types for the Orderchamp API SDK.
//!
//! # Overview
//!
//! - [`OrderchampConfig`]: credentials, endpoints and transport options
//! - [`OrderchampConfigBuilder`]: a builder for [`OrderchampConfig`]
//! - [`ConfigOptions`]: the recognized options map, loadable with serde
//! - [`ClientId`], [`ClientSecret`], [`SharedSecret`], [`AccessToken`]: credential newtypes
//! - [`BaseUrl`]: a validated base URL
//! - [`TlsVerification`]: certificate verification mode
//! - [`ComponentVersions`]: extra User-Agent tokens
//!
//! Credentials are not validated when the configuration is built. Each
//! operation checks for the credentials it needs when it is invoked.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use orderchamp_api::OrderchampConfig;
//!
//! let config = OrderchampConfig::builder()
//!     .client_id("my-client-id")
//!     .client_secret("my-client-secret")
//!     .timeout(Duration::from_secs(5))
//!     .add_version("MyPlugin", "2.1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.web_url().as_ref(), "https://www.orderchamp.com");
//! assert!(config.user_agent().ends_with("MyPlugin/2.1.0"));
//! ```

mod newtypes;
mod options;
mod tls;
mod user_agent;

pub use newtypes::{AccessToken, BaseUrl, ClientId, ClientSecret, SharedSecret};
pub use options::ConfigOptions;
pub use tls::TlsVerification;
pub use user_agent::{compose_user_agent, ComponentVersions, RUST_VERSION, SDK_VERSION};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the Orderchamp web application.
pub const DEFAULT_WEB_URL: &str = "https://www.orderchamp.com";

/// Default base URL of the Orderchamp API.
pub const DEFAULT_API_URL: &str = "https://api.orderchamp.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Orderchamp API SDK.
///
/// Immutable once built. The access token configured here is only the
/// initial value: [`OrderchampClient`](crate::OrderchampClient) keeps the
/// live token separately so it can be replaced after a token exchange.
///
/// # Thread Safety
///
/// `OrderchampConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OrderchampConfig {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    shared_secret: Option<SharedSecret>,
    web_url: BaseUrl,
    api_url: BaseUrl,
    verify: TlsVerification,
    timeout: Duration,
    versions: ComponentVersions,
}

impl OrderchampConfig {
    /// Creates a new builder for constructing an `OrderchampConfig`.
    #[must_use]
    pub fn builder() -> OrderchampConfigBuilder {
        OrderchampConfigBuilder::new()
    }

    /// Builds a configuration from the recognized options map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] for an unparseable `web_url` or
    /// `api_url`, and [`ConfigError::InvalidTimeout`] for a negative or
    /// non-finite `timeout`.
    pub fn from_options(options: ConfigOptions) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(client_id) = options.client_id {
            builder = builder.client_id(client_id);
        }
        if let Some(client_secret) = options.client_secret {
            builder = builder.client_secret(client_secret);
        }
        if let Some(access_token) = options.access_token {
            builder = builder.access_token(access_token);
        }
        if let Some(shared_secret) = options.shared_secret {
            builder = builder.shared_secret(shared_secret);
        }
        if let Some(web_url) = options.web_url {
            builder = builder.web_url(web_url);
        }
        if let Some(api_url) = options.api_url {
            builder = builder.api_url(api_url);
        }
        if let Some(verify) = options.verify {
            builder = builder.verify(verify);
        }
        if let Some(secs) = options.timeout {
            let timeout = Duration::try_from_secs_f64(secs).map_err(|_| {
                ConfigError::InvalidTimeout {
                    value: secs.to_string(),
                }
            })?;
            builder = builder.timeout(timeout);
        }

        builder.build()
    }

    /// Returns the client id, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the initial access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the shared secret, if configured.
    #[must_use]
    pub const fn shared_secret(&self) -> Option<&SharedSecret> {
        self.shared_secret.as_ref()
    }

    /// Returns the key used for signing: the client secret if present, else the
    /// shared secret.
    #[must_use]
    pub fn signing_secret(&self) -> Option<&str> {
        self.client_secret
            .as_ref()
            .map(AsRef::as_ref)
            .or_else(|| self.shared_secret.as_ref().map(AsRef::as_ref))
    }

    /// Returns the web base URL.
    #[must_use]
    pub const fn web_url(&self) -> &BaseUrl {
        &self.web_url
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &BaseUrl {
        &self.api_url
    }

    /// Returns the TLS verification mode.
    #[must_use]
    pub const fn verify(&self) -> &TlsVerification {
        &self.verify
    }

    /// Returns the per-request timeout. Zero means no timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the registered component versions.
    #[must_use]
    pub const fn versions(&self) -> &ComponentVersions {
        &self.versions
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        compose_user_agent(&self.versions)
    }
}

// Verify OrderchampConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderchampConfig>();
};

/// Builder for constructing [`OrderchampConfig`] instances.
///
/// No field is required. Empty strings passed for credentials are treated as
/// unset.
///
/// # Defaults
///
/// - `web_url`: `https://www.orderchamp.com`
/// - `api_url`: `https://api.orderchamp.com/v1`
/// - `verify`: [`TlsVerification::Enabled`]
/// - `timeout`: 10 seconds
#[derive(Debug, Default)]
pub struct OrderchampConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    shared_secret: Option<String>,
    web_url: Option<String>,
    api_url: Option<String>,
    verify: Option<TlsVerification>,
    timeout: Option<Duration>,
    versions: ComponentVersions,
}

impl OrderchampConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the OAuth client id.
    #[must_use]
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the OAuth client secret.
    #[must_use]
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Sets the initial access token.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the shared secret used for webhook verification.
    #[must_use]
    pub fn shared_secret(mut self, secret: impl Into<String>) -> Self {
        self.shared_secret = Some(secret.into());
        self
    }

    /// Sets the web base URL.
    #[must_use]
    pub fn web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = Some(url.into());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Sets the TLS verification mode.
    ///
    /// Accepts a `bool` or a [`PathBuf`](std::path::PathBuf) to a CA bundle.
    #[must_use]
    pub fn verify(mut self, verify: impl Into<TlsVerification>) -> Self {
        self.verify = Some(verify.into());
        self
    }

    /// Sets the per-request timeout. [`Duration::ZERO`] disables the timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registers a component that is reported in the User-Agent as `name/version`.
    #[must_use]
    pub fn add_version(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.versions.insert(name, version);
        self
    }

    /// Builds the [`OrderchampConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `web_url` or `api_url` cannot be parsed.
    pub fn build(self) -> Result<OrderchampConfig, ConfigError> {
        let web_url = BaseUrl::new(self.web_url.unwrap_or_else(|| DEFAULT_WEB_URL.to_string()))?;
        let api_url = BaseUrl::new(self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()))?;

        Ok(OrderchampConfig {
            client_id: non_empty(self.client_id).map(ClientId::new),
            client_secret: non_empty(self.client_secret).map(ClientSecret::new),
            access_token: non_empty(self.access_token).map(AccessToken::new),
            shared_secret: non_empty(self.shared_secret).map(SharedSecret::new),
            web_url,
            api_url,
            verify: self.verify.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            versions: self.versions,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builder_provides_documented_defaults() {
        let config = OrderchampConfig::builder().build().unwrap();

        assert_eq!(config.web_url().as_ref(), DEFAULT_WEB_URL);
        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert_eq!(config.verify(), &TlsVerification::Enabled);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.client_id().is_none());
        assert!(config.client_secret().is_none());
        assert!(config.access_token().is_none());
        assert!(config.shared_secret().is_none());
        assert!(config.versions().is_empty());
    }

    #[test]
    fn test_builder_does_not_require_credentials() {
        assert!(OrderchampConfig::builder().build().is_ok());
    }

    #[test]
    fn test_builder_treats_empty_credentials_as_unset() {
        let config = OrderchampConfig::builder()
            .client_id("")
            .client_secret("")
            .shared_secret("shared")
            .build()
            .unwrap();

        assert!(config.client_id().is_none());
        assert!(config.client_secret().is_none());
        assert_eq!(config.signing_secret(), Some("shared"));
    }

    #[test]
    fn test_signing_secret_prefers_client_secret() {
        let config = OrderchampConfig::builder()
            .client_secret("client")
            .shared_secret("shared")
            .build()
            .unwrap();

        assert_eq!(config.signing_secret(), Some("client"));
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = OrderchampConfig::builder().api_url("api.orderchamp.com").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = OrderchampConfig::builder()
            .client_id("id")
            .client_secret("secret")
            .access_token("token")
            .shared_secret("shared")
            .web_url("https://staging.orderchamp.test/")
            .api_url("https://api.staging.orderchamp.test/v2")
            .verify(PathBuf::from("/etc/ssl/ca.pem"))
            .timeout(Duration::from_millis(1500))
            .add_version("Plugin", "1.2")
            .build()
            .unwrap();

        assert_eq!(config.client_id().unwrap().as_ref(), "id");
        assert_eq!(config.access_token().unwrap().as_ref(), "token");
        assert_eq!(config.web_url().as_ref(), "https://staging.orderchamp.test");
        assert_eq!(config.api_url().as_ref(), "https://api.staging.orderchamp.test/v2");
        assert!(config.verify().ca_bundle().is_some());
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.versions().get("Plugin"), Some("1.2"));
    }

    #[test]
    fn test_user_agent_includes_sorted_versions() {
        let config = OrderchampConfig::builder()
            .add_version("WooCommerce", "8.0")
            .add_version("Bridge", "1.0")
            .build()
            .unwrap();

        let user_agent = config.user_agent();
        assert!(user_agent.starts_with(&format!("OrderchampApi/{SDK_VERSION} Rust/")));
        assert!(user_agent.ends_with("Bridge/1.0 WooCommerce/8.0"));
    }

    #[test]
    fn test_from_options_maps_every_field() {
        let options = ConfigOptions {
            client_id: Some("id".to_string()),
            client_secret: Some("secret".to_string()),
            access_token: Some("token".to_string()),
            shared_secret: Some("shared".to_string()),
            web_url: Some("http://localhost:8000".to_string()),
            api_url: Some("http://localhost:8001/v1".to_string()),
            verify: Some(TlsVerification::Disabled),
            timeout: Some(0.25),
        };

        let config = OrderchampConfig::from_options(options).unwrap();
        assert_eq!(config.client_secret().unwrap().as_ref(), "secret");
        assert_eq!(config.shared_secret().unwrap().as_ref(), "shared");
        assert_eq!(config.web_url().as_ref(), "http://localhost:8000");
        assert_eq!(config.api_url().as_ref(), "http://localhost:8001/v1");
        assert_eq!(config.verify(), &TlsVerification::Disabled);
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_from_options_rejects_negative_timeout() {
        let options = ConfigOptions {
            timeout: Some(-1.0),
            ..ConfigOptions::default()
        };
        assert!(matches!(
            OrderchampConfig::from_options(options),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OrderchampConfig>();
    }
}

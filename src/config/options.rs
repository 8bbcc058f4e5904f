//! The recognized configuration options map.

use serde::{Deserialize, Serialize};

use crate::config::TlsVerification;

/// Loosely typed configuration options.
///
/// Every field is optional and unset fields fall back to the defaults of
/// [`OrderchampConfigBuilder`](crate::OrderchampConfigBuilder). Unrecognized
/// keys are ignored.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::{ConfigOptions, OrderchampConfig};
///
/// let options: ConfigOptions = serde_json::from_str(r#"{
///     "client_id": "abc",
///     "client_secret": "s3cret",
///     "verify": false,
///     "timeout": 2.5
/// }"#).unwrap();
///
/// let config = OrderchampConfig::from_options(options).unwrap();
/// assert_eq!(config.client_id().unwrap().as_ref(), "abc");
/// assert_eq!(config.timeout().as_millis(), 2500);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    /// OAuth client id.
    pub client_id: Option<String>,
    /// OAuth client secret.
    pub client_secret: Option<String>,
    /// Initial access token.
    pub access_token: Option<String>,
    /// Shared secret for webhook verification.
    pub shared_secret: Option<String>,
    /// Base URL of the web application hosting the OAuth endpoints.
    pub web_url: Option<String>,
    /// Base URL of the API hosting the GraphQL endpoint.
    pub api_url: Option<String>,
    /// TLS verification: a boolean or a CA bundle path.
    pub verify: Option<TlsVerification>,
    /// Request timeout in seconds. `0` means no timeout.
    pub timeout: Option<f64>,
}

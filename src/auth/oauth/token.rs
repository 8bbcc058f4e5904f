//! Authorization code exchange.
//!
//! After the user approves the app, Orderchamp redirects to the app's
//! `redirect_uri` with a signed parameter set carrying a short-lived `code`.
//! [`exchange_token`] verifies that set and trades the code for an access
//! token at `{web_url}/oauth/access_token`.

use serde::{Deserialize, Serialize};

use crate::auth::parameters::SignedParameters;
use crate::auth::signature::verify_parameters;
use crate::clients::{send_json, HttpRequest, HttpTransport};
use crate::config::OrderchampConfig;
use crate::error::OrderchampError;

const GRANT_TYPE: &str = "authorization_code";

/// The token endpoint's response.
///
/// Fields other than `access_token` are kept as-is in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenExchangeResult {
    /// The access token for the API.
    pub access_token: String,
    /// Any further fields the endpoint returned.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Exchanges a verified authorization code for an access token.
///
/// The checks run in order and each failure returns before the transport is
/// called:
///
/// 1. `client_id` and `client_secret` must be configured
/// 2. `params` must pass [`verify_parameters`]
/// 3. `params` must carry a `code`
///
/// The request is sent once. Failures are never retried.
///
/// # Errors
///
/// - [`OrderchampError::MissingCredential`] if `client_id` or `client_secret`
///   is not configured
/// - [`OrderchampError::InvalidSignature`] if the parameters fail verification
/// - [`OrderchampError::InvalidCallback`] if the verified parameters carry no
///   `code`
/// - [`OrderchampError::Remote`] for transport failures, non-2xx responses and
///   bodies without an `access_token`
///
/// # Example
///
/// ```rust,no_run
/// use orderchamp_api::{OrderchampConfig, SignedParameters};
/// use orderchamp_api::auth::oauth::exchange_token;
/// use orderchamp_api::clients::ReqwestTransport;
///
/// # async fn run(query: &str) -> Result<(), Box<dyn std::error::Error>> {
/// let config = OrderchampConfig::builder()
///     .client_id("my-client-id")
///     .client_secret("my-client-secret")
///     .build()?;
/// let transport = ReqwestTransport::new()?;
///
/// let params = SignedParameters::from_query_str(query);
/// let token = exchange_token(&config, &transport, &params).await?;
/// println!("{}", token.access_token);
/// # Ok(())
/// # }
/// ```
pub async fn exchange_token(
    config: &OrderchampConfig,
    transport: &dyn HttpTransport,
    params: &SignedParameters,
) -> Result<TokenExchangeResult, OrderchampError> {
    let client_id: &str = config
        .client_id()
        .ok_or(OrderchampError::MissingCredential { field: "client_id" })?
        .as_ref();
    let client_secret: &str = config
        .client_secret()
        .ok_or(OrderchampError::MissingCredential {
            field: "client_secret",
        })?
        .as_ref();

    if !verify_parameters(config, params)? {
        tracing::warn!(
            account_id = params.get("account_id"),
            "Rejected callback parameters with an invalid signature"
        );
        return Err(OrderchampError::InvalidSignature);
    }

    let code = params.get("code").ok_or_else(|| OrderchampError::InvalidCallback {
        reason: "missing code parameter".to_string(),
    })?;

    let body = serde_json::json!({
        "grant_type": GRANT_TYPE,
        "code": code,
        "client_id": client_id,
        "client_secret": client_secret,
    });
    let request = HttpRequest::post_json(config.web_url().join("/oauth/access_token"), body, config);

    let result: TokenExchangeResult = send_json(transport, request).await?;
    tracing::debug!(account_id = params.get("account_id"), "Exchanged authorization code");
    Ok(result)
}

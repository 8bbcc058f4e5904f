//! The high-level Orderchamp client.
//!
//! [`OrderchampClient`] bundles a configuration, a transport and the current
//! access token. A successful [`OrderchampClient::exchange_token`] stores the
//! new token, so later GraphQL calls are authenticated without further
//! wiring.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::auth::oauth::{self, AuthorizationRequest};
use crate::auth::{self, SignedParameters};
use crate::clients::graphql::{self, GraphqlRequest};
use crate::clients::{HttpError, HttpTransport, ReqwestTransport};
use crate::config::{AccessToken, ConfigOptions, OrderchampConfig};
use crate::error::OrderchampError;

/// Client for the Orderchamp API.
///
/// The configuration is immutable. The access token is the only mutable
/// state and sits behind a lock, so a client can be shared across tasks.
/// Each read sees either the previous token or the new one in full.
///
/// # Example
///
/// ```rust,no_run
/// use orderchamp_api::{OrderchampClient, OrderchampConfig};
///
/// # async fn run() -> Result<(), orderchamp_api::OrderchampError> {
/// let config = OrderchampConfig::builder()
///     .access_token("my-access-token")
///     .build()?;
/// let client = OrderchampClient::new(config)?;
///
/// let response = client.graphql("{ me { id } }", None, None).await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
pub struct OrderchampClient {
    config: Arc<OrderchampConfig>,
    transport: Arc<dyn HttpTransport>,
    access_token: RwLock<Option<AccessToken>>,
}

// Verify OrderchampClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrderchampClient>();
};

impl OrderchampClient {
    /// Creates a client that sends requests with [`ReqwestTransport`].
    ///
    /// The HTTP client for the configured TLS mode is built here, so an
    /// unreadable CA bundle is reported at construction.
    ///
    /// # Errors
    ///
    /// Returns [`OrderchampError::Remote`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: OrderchampConfig) -> Result<Self, OrderchampError> {
        let transport = ReqwestTransport::for_tls(config.verify()).map_err(HttpError::from)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: OrderchampConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let access_token = config.access_token().cloned();
        Self {
            config: Arc::new(config),
            transport,
            access_token: RwLock::new(access_token),
        }
    }

    /// Creates a client from loosely-typed options.
    ///
    /// # Errors
    ///
    /// Returns [`OrderchampError::Config`] if an option cannot be represented
    /// and [`OrderchampError::Remote`] if the HTTP client cannot be
    /// initialized.
    pub fn from_options(options: ConfigOptions) -> Result<Self, OrderchampError> {
        Self::new(OrderchampConfig::from_options(options)?)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &OrderchampConfig {
        &self.config
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        self.config.user_agent()
    }

    /// Returns the current access token.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let token = token.into();
        let token = (!token.is_empty()).then(|| AccessToken::new(token));
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Forgets the access token.
    pub fn clear_access_token(&self) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Builds the URL that starts the authorization code flow.
    ///
    /// See [`oauth::authorization_url`].
    #[must_use]
    pub fn authorization_url<I, S>(&self, scopes: I, redirect_uri: &str, state: Option<&str>) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        oauth::authorization_url(&self.config, scopes, redirect_uri, state)
    }

    /// Builds the authorization URL for a prepared request.
    #[must_use]
    pub fn authorize(&self, request: &AuthorizationRequest) -> String {
        request.url(&self.config)
    }

    /// Exchanges the callback parameters for an access token and stores it
    /// on the client.
    ///
    /// # Errors
    ///
    /// See [`oauth::exchange_token`]. On error the stored token is unchanged.
    pub async fn exchange_token(&self, params: &SignedParameters) -> Result<String, OrderchampError> {
        let result = oauth::exchange_token(&self.config, self.transport.as_ref(), params).await?;
        self.set_access_token(result.access_token.clone());
        tracing::debug!("Stored access token from token exchange");
        Ok(result.access_token)
    }

    /// Executes a GraphQL query with the current access token.
    ///
    /// # Errors
    ///
    /// See [`graphql::execute`].
    pub async fn graphql(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        operation_name: Option<&str>,
    ) -> Result<serde_json::Value, OrderchampError> {
        let mut request = GraphqlRequest::new(query);
        if let Some(variables) = variables {
            request = request.variables(variables);
        }
        if let Some(operation_name) = operation_name {
            request = request.operation_name(operation_name);
        }
        self.execute(&request).await
    }

    /// Executes a prepared GraphQL request with the current access token.
    ///
    /// # Errors
    ///
    /// See [`graphql::execute`].
    pub async fn execute(&self, request: &GraphqlRequest) -> Result<serde_json::Value, OrderchampError> {
        let access_token = self.access_token();
        graphql::execute(
            &self.config,
            self.transport.as_ref(),
            access_token.as_ref(),
            request,
        )
        .await
    }

    /// Signs a payload. See [`auth::sign`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderchampError::MissingCredential`] if no secret is configured.
    pub fn sign(&self, payload: &str) -> Result<String, OrderchampError> {
        auth::sign(&self.config, payload)
    }

    /// Verifies a payload signature. See [`auth::verify_signature`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderchampError::MissingCredential`] if no secret is configured.
    pub fn verify_signature(&self, payload: &str, signature: &str) -> Result<bool, OrderchampError> {
        auth::verify_signature(&self.config, payload, signature)
    }

    /// Verifies a signed parameter set. See [`auth::verify_parameters`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderchampError::MissingCredential`] if the required keys are
    /// present but no secret is configured.
    pub fn verify_parameters(&self, params: &SignedParameters) -> Result<bool, OrderchampError> {
        auth::verify_parameters(&self.config, params)
    }
}

impl fmt::Debug for OrderchampClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderchampClient")
            .field("config", &self.config)
            .field("access_token", &self.access_token())
            .finish_non_exhaustive()
    }
}

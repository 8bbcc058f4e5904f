//! Authorization URL generation.
//!
//! The first step of the authorization code flow: send the user to
//! `{web_url}/oauth/authorize`, where they grant the app access. Orderchamp
//! then redirects them to `redirect_uri` with signed parameters that are fed
//! to [`exchange_token`](crate::auth::oauth::exchange_token).

use crate::auth::canonical::build_query;
use crate::auth::oauth::state::OAuthState;
use crate::config::OrderchampConfig;

/// The inputs of an authorization redirect.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::{AuthorizationRequest, OAuthState, OrderchampConfig};
///
/// let config = OrderchampConfig::builder().client_id("abc").build().unwrap();
///
/// let request = AuthorizationRequest::new(["read", "write"], "https://app.example/cb")
///     .state(OAuthState::new("xyz"));
///
/// assert_eq!(
///     request.url(&config),
///     "https://www.orderchamp.com/oauth/authorize?response_type=code&client_id=abc\
///      &redirect_uri=https%3A%2F%2Fapp.example%2Fcb&scope=read%2Cwrite&state=xyz"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// Requested scopes, sent comma-joined in the given order.
    pub scopes: Vec<String>,
    /// Where Orderchamp sends the user back to.
    pub redirect_uri: String,
    /// The `state` echoed back on the redirect. Defaults to the current time.
    pub state: Option<OAuthState>,
}

impl AuthorizationRequest {
    /// Creates a request without an explicit state.
    #[must_use]
    pub fn new<I, S>(scopes: I, redirect_uri: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
            redirect_uri: redirect_uri.into(),
            state: None,
        }
    }

    /// Sets the state.
    #[must_use]
    pub fn state(mut self, state: impl Into<OAuthState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Builds the authorization URL for this request.
    #[must_use]
    pub fn url(&self, config: &OrderchampConfig) -> String {
        let state = self.state.clone().unwrap_or_else(|| {
            tracing::debug!("No OAuth state supplied, using the current timestamp");
            OAuthState::timestamp()
        });
        let scope = self.scopes.join(",");

        let mut params = vec![("response_type", "code")];
        // Unset values are left out of the query, as form encoding skips them.
        if let Some(client_id) = config.client_id() {
            params.push(("client_id", client_id.as_ref()));
        }
        params.push(("redirect_uri", self.redirect_uri.as_str()));
        params.push(("scope", scope.as_str()));
        params.push(("state", state.as_ref()));

        format!(
            "{}?{}",
            config.web_url().join("/oauth/authorize"),
            build_query(params)
        )
    }
}

/// Builds the URL that starts the authorization code flow.
///
/// `state` defaults to the current time in ISO-8601 form. See
/// [`OAuthState`] for why callers should prefer their own value.
///
/// This is a pure function of the configuration and its inputs.
#[must_use]
pub fn authorization_url<I, S>(
    config: &OrderchampConfig,
    scopes: I,
    redirect_uri: &str,
    state: Option<&str>,
) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut request = AuthorizationRequest::new(scopes, redirect_uri);
    if let Some(state) = state {
        request = request.state(state);
    }
    request.url(config)
}

//! GraphQL execution against the Orderchamp API.
//!
//! The executor sends the query to `{api_url}/graphql` with the bearer token
//! and hands back the decoded body verbatim. GraphQL-level errors arrive with
//! HTTP 200 in the `errors` array and are left for the caller to inspect.

use serde::Serialize;

use crate::clients::errors::{HttpError, TransportError};
use crate::clients::transport::{send_json, HttpRequest, HttpTransport};
use crate::config::{AccessToken, OrderchampConfig};
use crate::error::OrderchampError;

/// A GraphQL operation.
///
/// Serializes to the wire body `{query, variables, operationName}`. Unset
/// `variables` and `operationName` are sent as `null`.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query Me { me { id } }")
///     .variables(json!({ "first": 10 }))
///     .operation_name("Me");
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     json!({
///         "query": "query Me { me { id } }",
///         "variables": { "first": 10 },
///         "operationName": "Me"
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The query or mutation document.
    pub query: String,
    /// Variables for the operation.
    pub variables: Option<serde_json::Value>,
    /// The operation to run when the document defines several.
    #[serde(rename = "operationName")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    /// Creates a request for the given document.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Sets the variables.
    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// Executes a GraphQL operation.
///
/// # Errors
///
/// - [`OrderchampError::MissingCredential`] if `access_token` is `None`; the
///   transport is not called
/// - [`OrderchampError::Remote`] for transport failures, non-2xx responses and
///   malformed JSON
pub async fn execute(
    config: &OrderchampConfig,
    transport: &dyn HttpTransport,
    access_token: Option<&AccessToken>,
    request: &GraphqlRequest,
) -> Result<serde_json::Value, OrderchampError> {
    let access_token: &str = access_token
        .ok_or(OrderchampError::MissingCredential {
            field: "access_token",
        })?
        .as_ref();

    let body = serde_json::to_value(request).map_err(|e| {
        let error = TransportError::new(format!("Failed to serialize request body: {e}"));
        HttpError::from(error.with_source(e))
    })?;

    let http_request = HttpRequest::post_json(config.api_url().join("/graphql"), body, config)
        .header("Authorization", format!("Bearer {access_token}"));

    let response: serde_json::Value = send_json(transport, http_request).await?;
    Ok(response)
}

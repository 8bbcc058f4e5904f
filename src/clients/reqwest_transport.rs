//! Default [`HttpTransport`] backed by `reqwest`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::config::TlsVerification;

/// HTTP transport using a `reqwest` client with rustls.
///
/// One client is built per TLS verification mode, on the first request that
/// uses it, and reused afterwards. A CA bundle is read from disk only when its
/// client is built.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::clients::ReqwestTransport;
///
/// let transport = ReqwestTransport::new().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    clients: Arc<Mutex<HashMap<TlsVerification, reqwest::Client>>>,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport that verifies certificates against the default roots.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        Self::for_tls(&TlsVerification::Enabled)
    }

    /// Creates a transport with the client for `tls` built up front.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the client cannot be built, for example
    /// when the CA bundle cannot be read or holds no certificate.
    pub fn for_tls(tls: &TlsVerification) -> Result<Self, TransportError> {
        let client = build_client(tls)?;
        Ok(Self::from_client(tls.clone(), client))
    }

    /// Wraps an existing `reqwest` client.
    ///
    /// The client is used for requests with [`TlsVerification::Enabled`].
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self::from_client(TlsVerification::Enabled, client)
    }

    fn from_client(tls: TlsVerification, client: reqwest::Client) -> Self {
        let mut clients = HashMap::new();
        clients.insert(tls, client);
        Self {
            clients: Arc::new(Mutex::new(clients)),
        }
    }

    fn client_for(&self, tls: &TlsVerification) -> Result<reqwest::Client, TransportError> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(tls) {
            return Ok(client.clone());
        }

        tracing::debug!(?tls, "Building HTTP client for TLS mode");
        let client = build_client(tls)?;
        clients.insert(tls.clone(), client.clone());
        Ok(client)
    }
}

fn build_client(tls: &TlsVerification) -> Result<reqwest::Client, TransportError> {
    let mut builder = reqwest::Client::builder().use_rustls_tls();

    match tls {
        TlsVerification::Enabled => {}
        TlsVerification::Disabled => {
            builder = builder.danger_accept_invalid_certs(true);
        }
        TlsVerification::CaBundle(path) => {
            // The bundle replaces the built-in roots.
            builder = builder.tls_built_in_root_certs(false);
            for certificate in load_ca_bundle(path)? {
                builder = builder.add_root_certificate(certificate);
            }
        }
    }

    Ok(builder.build()?)
}

fn load_ca_bundle(path: &Path) -> Result<Vec<reqwest::Certificate>, TransportError> {
    let read_error = |e: std::io::Error| {
        TransportError::new(format!("Failed to read CA bundle '{}': {e}", path.display()))
            .with_source(e)
    };

    let pem = std::fs::read(path).map_err(read_error)?;
    let mut certificates = Vec::new();
    for der in rustls_pemfile::certs(&mut pem.as_slice()) {
        let der = der.map_err(read_error)?;
        certificates.push(reqwest::Certificate::from_der(der.as_ref())?);
    }

    if certificates.is_empty() {
        return Err(TransportError::new(format!(
            "CA bundle '{}' contains no certificates",
            path.display()
        )));
    }
    Ok(certificates)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let client = self.client_for(&request.tls)?;

        let mut builder = match request.method {
            HttpMethod::Post => client.post(&request.url),
        };
        if !request.timeout.is_zero() {
            builder = builder.timeout(request.timeout);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = parse_response_headers(response.headers());
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

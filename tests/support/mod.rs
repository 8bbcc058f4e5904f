//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use orderchamp_api::auth::compute_signature;
use orderchamp_api::clients::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use orderchamp_api::{OrderchampConfig, SignedParameters};

/// A transport that records every request and replays queued responses.
///
/// Once the queue is empty it answers with a transport error.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.push_response(HttpResponse::new(status, body));
        Arc::new(transport)
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no response queued")))
    }
}

/// Creates a configuration suitable for the token exchange.
pub fn oauth_config(web_url: &str) -> OrderchampConfig {
    OrderchampConfig::builder()
        .client_id("test-client-id")
        .client_secret("test-client-secret")
        .web_url(web_url)
        .build()
        .unwrap()
}

/// Creates callback parameters signed with `secret`.
pub fn signed_callback(secret: &str, code: &str) -> SignedParameters {
    let mut params: SignedParameters = [
        ("account_id", "1001"),
        ("code", code),
        ("timestamp", "1700000000"),
    ]
    .into_iter()
    .collect();
    let signature = compute_signature(&params.signable_string(), secret);
    params.insert("signature", signature);
    params
}

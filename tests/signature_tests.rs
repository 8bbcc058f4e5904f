//! Integration tests for signing and signature verification.

use orderchamp_api::auth::{compute_signature, sign_parameters};
use orderchamp_api::{
    sign, verify_parameters, verify_signature, OrderchampClient, OrderchampConfig, OrderchampError,
    SignedParameters,
};

fn create_test_config() -> OrderchampConfig {
    OrderchampConfig::builder().client_secret("client-secret").build().unwrap()
}

// ============================================================================
// Payload Signature Tests
// ============================================================================

#[test]
fn test_signature_is_hmac_sha256_hex_of_payload() {
    let config = create_test_config();
    let payload = r#"{"id":1,"event":"order.created"}"#;

    let signature = sign(&config, payload).unwrap();

    assert_eq!(signature, compute_signature(payload, "client-secret"));
    assert_eq!(signature.len(), 64);
    assert!(verify_signature(&config, payload, &signature).unwrap());
}

#[test]
fn test_uppercase_signature_does_not_verify() {
    let config = create_test_config();
    let signature = sign(&config, "payload").unwrap().to_uppercase();
    assert!(!verify_signature(&config, "payload", &signature).unwrap());
}

#[test]
fn test_truncated_signature_does_not_verify() {
    let config = create_test_config();
    let signature = sign(&config, "payload").unwrap();
    assert!(!verify_signature(&config, "payload", &signature[..63]).unwrap());
    assert!(!verify_signature(&config, "payload", "").unwrap());
}

#[test]
fn test_verification_without_secret_is_error() {
    let config = OrderchampConfig::builder().client_id("id").build().unwrap();
    let error = verify_signature(&config, "payload", "abc").unwrap_err();
    assert!(matches!(error, OrderchampError::MissingCredential { .. }));
    assert_eq!(error.to_string(), "No client_secret or shared_secret was set.");
}

// ============================================================================
// Parameter Set Tests
// ============================================================================

#[test]
fn test_signed_redirect_query_verifies() {
    let config = create_test_config();
    let mut params = SignedParameters::from_query_str("account_id=1001&timestamp=1700000000&code=abc%2Fdef");
    let signature = sign_parameters(&config, &params).unwrap();
    params.insert("signature", signature.clone());

    let query = format!("code=abc%2Fdef&signature={signature}&timestamp=1700000000&account_id=1001");
    let parsed = SignedParameters::from_query_str(&query);

    assert!(verify_parameters(&config, &parsed).unwrap());
}

#[test]
fn test_signable_string_is_sorted_form_encoding() {
    let params: SignedParameters = [
        ("timestamp", "1700000000"),
        ("account_id", "1001"),
        ("shop name", "Tom & Jerry"),
        ("signature", "ignored"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        params.signable_string(),
        "account_id=1001&shop+name=Tom+%26+Jerry&timestamp=1700000000"
    );
}

#[test]
fn test_each_missing_required_key_fails_verification() {
    let config = create_test_config();
    let mut params: SignedParameters = [("account_id", "1001"), ("timestamp", "1700000000")]
        .into_iter()
        .collect();
    let signature = sign_parameters(&config, &params).unwrap();
    params.insert("signature", signature);
    assert!(verify_parameters(&config, &params).unwrap());

    for key in ["account_id", "timestamp", "signature"] {
        let mut partial = params.clone();
        partial.remove(key);
        assert!(!verify_parameters(&config, &partial).unwrap(), "missing {key}");
    }
}

#[test]
fn test_shared_secret_used_when_no_client_secret() {
    let config = OrderchampConfig::builder().shared_secret("shared").build().unwrap();
    let client = OrderchampClient::new(config).unwrap();

    let signature = client.sign("payload").unwrap();

    assert_eq!(signature, compute_signature("payload", "shared"));
    assert!(client.verify_signature("payload", &signature).unwrap());
}

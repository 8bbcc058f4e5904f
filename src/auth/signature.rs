//! HMAC-SHA256 signing and verification.
//!
//! Orderchamp signs redirect and webhook parameters with HMAC-SHA256 keyed by
//! the app's `client_secret`, or by the `shared_secret` when no client secret
//! is configured. Signatures are lowercase hex.
//!
//! A mismatch is reported as `Ok(false)`. Only a missing secret is an error,
//! which keeps "could not check" apart from "checked and rejected".
//!
//! # Security
//!
//! Signature comparison is constant-time.
//!
//! # Example
//!
//! ```rust
//! use orderchamp_api::{OrderchampConfig, SignedParameters};
//! use orderchamp_api::auth::{sign, sign_parameters, verify_parameters, verify_signature};
//!
//! let config = OrderchampConfig::builder().shared_secret("webhook-secret").build().unwrap();
//!
//! let signature = sign(&config, "payload").unwrap();
//! assert!(verify_signature(&config, "payload", &signature).unwrap());
//! assert!(!verify_signature(&config, "tampered", &signature).unwrap());
//!
//! let mut params: SignedParameters = [("account_id", "42"), ("timestamp", "1700000000")]
//!     .into_iter()
//!     .collect();
//! let signature = sign_parameters(&config, &params).unwrap();
//! params.insert("signature", signature);
//! assert!(verify_parameters(&config, &params).unwrap());
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::auth::parameters::SignedParameters;
use crate::config::OrderchampConfig;
use crate::error::OrderchampError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex HMAC-SHA256 of `message` keyed by `secret`.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::auth::compute_signature;
///
/// let sig = compute_signature("test-message", "secret-key");
/// assert_eq!(sig.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compares two strings in constant time.
///
/// The comparison inspects every byte; only a length difference returns early.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

fn signing_secret(config: &OrderchampConfig) -> Result<&str, OrderchampError> {
    config
        .signing_secret()
        .ok_or(OrderchampError::MissingCredential {
            field: "client_secret or shared_secret",
        })
}

/// Signs a payload with the configured secret.
///
/// # Errors
///
/// Returns [`OrderchampError::MissingCredential`] if neither `client_secret`
/// nor `shared_secret` is configured.
pub fn sign(config: &OrderchampConfig, payload: &str) -> Result<String, OrderchampError> {
    Ok(compute_signature(payload, signing_secret(config)?))
}

/// Checks `signature` against the expected signature of `payload`.
///
/// # Errors
///
/// Returns [`OrderchampError::MissingCredential`] if neither `client_secret`
/// nor `shared_secret` is configured. A mismatch is `Ok(false)`.
pub fn verify_signature(
    config: &OrderchampConfig,
    payload: &str,
    signature: &str,
) -> Result<bool, OrderchampError> {
    let expected = sign(config, payload)?;
    Ok(constant_time_compare(&expected, signature))
}

/// Verifies a signed parameter set.
///
/// Returns `Ok(false)` without consulting the secrets if `account_id`,
/// `timestamp` or `signature` is absent. Otherwise verifies the signature over
/// [`SignedParameters::signable_string`].
///
/// # Errors
///
/// Returns [`OrderchampError::MissingCredential`] if the required keys are
/// present but no secret is configured.
pub fn verify_parameters(
    config: &OrderchampConfig,
    params: &SignedParameters,
) -> Result<bool, OrderchampError> {
    if !params.has_required_keys() {
        return Ok(false);
    }
    let Some(signature) = params.signature() else {
        return Ok(false);
    };

    verify_signature(config, &params.signable_string(), signature)
}

/// Computes the signature for a parameter set, ignoring any `signature` it
/// already carries.
///
/// # Errors
///
/// Returns [`OrderchampError::MissingCredential`] if no secret is configured.
pub fn sign_parameters(
    config: &OrderchampConfig,
    params: &SignedParameters,
) -> Result<String, OrderchampError> {
    sign(config, &params.signable_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_client_secret(secret: &str) -> OrderchampConfig {
        OrderchampConfig::builder().client_secret(secret).build().unwrap()
    }

    fn signed_params(secret: &str) -> SignedParameters {
        let mut params: SignedParameters = [
            ("account_id", "42"),
            ("timestamp", "1700000000"),
            ("code", "auth-code"),
        ]
        .into_iter()
        .collect();
        let signature = compute_signature(&params.signable_string(), secret);
        params.insert("signature", signature);
        params
    }

    #[test]
    fn test_compute_signature_matches_known_value() {
        // HMAC-SHA256("message", "key")
        assert_eq!(
            compute_signature("message", "key"),
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_compute_signature_is_lowercase_hex() {
        let sig = compute_signature("", "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(!constant_time_compare("ABC", "abc"));
    }

    #[test]
    fn test_sign_requires_a_secret() {
        let config = OrderchampConfig::builder().build().unwrap();
        assert!(matches!(
            sign(&config, "payload"),
            Err(OrderchampError::MissingCredential {
                field: "client_secret or shared_secret"
            })
        ));
        assert!(verify_signature(&config, "payload", "sig").is_err());
    }

    #[test]
    fn test_sign_prefers_client_secret_over_shared_secret() {
        let config = OrderchampConfig::builder()
            .client_secret("client")
            .shared_secret("shared")
            .build()
            .unwrap();

        assert_eq!(sign(&config, "p").unwrap(), compute_signature("p", "client"));
    }

    #[test]
    fn test_sign_falls_back_to_shared_secret() {
        let config = OrderchampConfig::builder().shared_secret("shared").build().unwrap();
        assert_eq!(sign(&config, "p").unwrap(), compute_signature("p", "shared"));
    }

    #[test]
    fn test_single_byte_mutation_fails_verification() {
        let config = config_with_client_secret("secret");
        let signature = sign(&config, "payload").unwrap();
        assert!(verify_signature(&config, "payload", &signature).unwrap());

        for i in 0..signature.len() {
            let mut bytes = signature.clone().into_bytes();
            bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
            let mutated = String::from_utf8(bytes).unwrap();
            assert!(!verify_signature(&config, "payload", &mutated).unwrap());
        }
    }

    #[test]
    fn test_verify_parameters_accepts_valid_set() {
        let config = config_with_client_secret("secret");
        assert!(verify_parameters(&config, &signed_params("secret")).unwrap());
    }

    #[test]
    fn test_verify_parameters_rejects_wrong_secret() {
        let config = config_with_client_secret("secret");
        assert!(!verify_parameters(&config, &signed_params("other")).unwrap());
    }

    #[test]
    fn test_verify_parameters_rejects_tampered_value() {
        let config = config_with_client_secret("secret");
        let mut params = signed_params("secret");
        params.insert("account_id", "43");
        assert!(!verify_parameters(&config, &params).unwrap());
    }

    #[test]
    fn test_verify_parameters_false_when_required_key_missing() {
        let config = config_with_client_secret("secret");
        for key in ["account_id", "timestamp", "signature"] {
            let mut params = signed_params("secret");
            params.remove(key);
            assert!(!verify_parameters(&config, &params).unwrap(), "missing {key}");
        }
    }

    #[test]
    fn test_verify_parameters_missing_keys_checked_before_secret() {
        let config = OrderchampConfig::builder().build().unwrap();
        assert!(!verify_parameters(&config, &SignedParameters::new()).unwrap());
        assert!(verify_parameters(&config, &signed_params("secret")).is_err());
    }

    #[test]
    fn test_verification_is_insertion_order_independent() {
        let config = config_with_client_secret("secret");
        let reference = signed_params("secret");
        let signature = reference.signature().unwrap().to_string();

        let reversed: SignedParameters = [
            ("signature", signature.as_str()),
            ("code", "auth-code"),
            ("timestamp", "1700000000"),
            ("account_id", "42"),
        ]
        .into_iter()
        .collect();

        assert_eq!(reversed, reference);
        assert!(verify_parameters(&config, &reversed).unwrap());
    }

    #[test]
    fn test_sign_parameters_ignores_existing_signature() {
        let config = config_with_client_secret("secret");
        let params = signed_params("secret");
        assert_eq!(sign_parameters(&config, &params).unwrap(), params.signature().unwrap());
    }
}

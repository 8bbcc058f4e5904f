//! Signed parameter sets received on redirects and webhooks.

use std::collections::BTreeMap;

use crate::auth::canonical::{build_query, form_decode};

/// Name of the parameter carrying the signature.
pub const SIGNATURE_KEY: &str = "signature";

/// Parameters that must be present for a set to be verifiable.
pub const REQUIRED_KEYS: [&str; 3] = ["account_id", "timestamp", SIGNATURE_KEY];

/// A set of string parameters signed by Orderchamp.
///
/// Keys are held in ascending byte order, so the signable string is the same
/// no matter in which order the parameters were inserted.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::SignedParameters;
///
/// let params = SignedParameters::from_query_str("timestamp=1700000000&code=a+b&account_id=42&signature=abc");
/// assert_eq!(params.get("code"), Some("a b"));
/// assert_eq!(params.signature(), Some("abc"));
/// assert_eq!(params.signable_string(), "account_id=42&code=a+b&timestamp=1700000000");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignedParameters(BTreeMap<String, String>);

impl SignedParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string such as the one on the OAuth redirect.
    ///
    /// A leading `?` is ignored. Repeated keys keep the last value.
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (form_decode(key), form_decode(value))
            })
            .collect()
    }

    /// Sets a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a parameter.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the parameter is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the `signature` parameter.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.get(SIGNATURE_KEY)
    }

    /// Returns `true` if `account_id`, `timestamp` and `signature` are all present.
    #[must_use]
    pub fn has_required_keys(&self) -> bool {
        REQUIRED_KEYS.iter().all(|key| self.contains_key(key))
    }

    /// Returns the canonical string that is signed: every parameter except
    /// `signature`, sorted by key and form-encoded.
    #[must_use]
    pub fn signable_string(&self) -> String {
        build_query(
            self.iter()
                .filter(|(key, _)| *key != SIGNATURE_KEY),
        )
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SignedParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> Extend<(K, V)> for SignedParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl From<BTreeMap<String, String>> for SignedParameters {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<std::collections::HashMap<String, String>> for SignedParameters {
    fn from(map: std::collections::HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

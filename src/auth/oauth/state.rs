//! The OAuth `state` parameter.
//!
//! When the caller does not supply a state, the current time is used. That
//! value is predictable and is not tied to the user's session, so it offers
//! no CSRF or replay protection. Callers that need protection should send
//! [`OAuthState::random`] (or their own unguessable value), store it with the
//! user's session, and compare it against the `state` returned on the
//! redirect with [`constant_time_compare`](crate::auth::constant_time_compare).

use std::fmt;

use chrono::{SecondsFormat, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

const RANDOM_STATE_LENGTH: usize = 32;

/// An OAuth `state` value.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::OAuthState;
///
/// let state = OAuthState::random();
/// assert_eq!(state.as_ref().len(), 32);
///
/// let state = OAuthState::new("csrf-token");
/// assert_eq!(state.to_string(), "csrf-token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthState(String);

impl OAuthState {
    /// Wraps a caller-chosen state.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    /// The current UTC time in ISO-8601 form, e.g. `2024-05-01T12:00:00+00:00`.
    #[must_use]
    pub fn timestamp() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    /// A 32-character random alphanumeric state from the thread-local CSPRNG.
    #[must_use]
    pub fn random() -> Self {
        let state = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_STATE_LENGTH)
            .map(char::from)
            .collect();
        Self(state)
    }
}

impl AsRef<str> for OAuthState {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OAuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OAuthState {
    fn from(state: &str) -> Self {
        Self::new(state)
    }
}

impl From<String> for OAuthState {
    fn from(state: String) -> Self {
        Self(state)
    }
}

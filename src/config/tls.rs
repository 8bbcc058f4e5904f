//! TLS certificate verification settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the transport verifies the server's TLS certificate.
///
/// Deserializes from either a boolean or a path string, so the `verify`
/// option can be written as `true`, `false` or `"/etc/ssl/ca.pem"`.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::TlsVerification;
///
/// let tls: TlsVerification = serde_json::from_str("false").unwrap();
/// assert_eq!(tls, TlsVerification::Disabled);
///
/// let tls: TlsVerification = serde_json::from_str(r#""/etc/ssl/ca.pem""#).unwrap();
/// assert_eq!(tls.ca_bundle().unwrap().to_str(), Some("/etc/ssl/ca.pem"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TlsVerification {
    /// Verify against the default root store.
    #[default]
    Enabled,
    /// Accept any certificate.
    Disabled,
    /// Verify against the certificates in the PEM bundle at this path only.
    /// The default roots are not trusted in this mode.
    CaBundle(PathBuf),
}

impl TlsVerification {
    /// Returns `true` unless verification is disabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Returns the CA bundle path, if one is configured.
    #[must_use]
    pub fn ca_bundle(&self) -> Option<&Path> {
        match self {
            Self::CaBundle(path) => Some(path),
            _ => None,
        }
    }
}

impl From<bool> for TlsVerification {
    fn from(verify: bool) -> Self {
        if verify {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<PathBuf> for TlsVerification {
    fn from(path: PathBuf) -> Self {
        Self::CaBundle(path)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Flag(bool),
    Path(PathBuf),
}

impl Serialize for TlsVerification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Enabled => Repr::Flag(true),
            Self::Disabled => Repr::Flag(false),
            Self::CaBundle(path) => Repr::Path(path.clone()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TlsVerification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => flag.into(),
            Repr::Path(path) => path.into(),
        })
    }
}

//! User-Agent composition.

use std::collections::BTreeMap;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum supported Rust version from Cargo.toml, reported as the runtime version.
pub const RUST_VERSION: &str = env!("CARGO_PKG_RUST_VERSION");

/// Extra `name/version` tokens appended to the User-Agent.
///
/// Tokens are kept sorted by name; registering a name twice replaces the
/// earlier version.
///
/// # Example
///
/// ```rust
/// use orderchamp_api::ComponentVersions;
///
/// let mut versions = ComponentVersions::new();
/// versions.insert("Zeta", "2.0");
/// versions.insert("Alpha", "1.0");
/// assert_eq!(versions.to_string(), "Alpha/1.0 Zeta/2.0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentVersions(BTreeMap<String, String>);

impl ComponentVersions {
    /// Creates an empty set of component versions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component version.
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.0.insert(name.into(), version.into());
    }

    /// Returns the version registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns `true` if no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, version)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ComponentVersions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (name, version) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{name}/{version}")?;
            first = false;
        }
        Ok(())
    }
}

/// Builds the User-Agent header value.
///
/// Format: `OrderchampApi/<sdk> Rust/<rust> <name/version ...>`, trimmed.
#[must_use]
pub fn compose_user_agent(versions: &ComponentVersions) -> String {
    format!("OrderchampApi/{SDK_VERSION} Rust/{RUST_VERSION} {versions}")
        .trim()
        .to_string()
}

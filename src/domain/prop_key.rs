// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property key newtype for type-safe key handling.
//!
//! This module provides the `PropKey` type, which is a newtype wrapper around
//! `String` that provides type safety for property keys and prevents
//! accidental string confusion.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for property keys.
///
/// `PropKey` is a newtype that wraps a `String` to provide type safety when
/// working with property keys. This prevents accidental mixing of keys with
/// other string values and makes the API more self-documenting.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::prop_key::PropKey;
///
/// let key = PropKey::from("scylla_ami_id");
/// let key2 = PropKey::from("buildMetadataFile".to_string());
///
/// assert_eq!(key.as_str(), "scylla_ami_id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropKey(String);

impl PropKey {
    /// Creates a new `PropKey` from a `String`.
    pub fn new(key: String) -> Self {
        PropKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PropKey {
    fn from(s: String) -> Self {
        PropKey(s)
    }
}

impl From<&str> for PropKey {
    fn from(s: &str) -> Self {
        PropKey(s.to_string())
    }
}

impl From<PropKey> for String {
    fn from(key: PropKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for PropKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property value type.
//!
//! This module provides the `PropValue` type, which wraps property values and
//! provides a typed parsing escape hatch for the rare non-string read.

use crate::domain::errors::{PropError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for property values.
///
/// `PropValue` stores values as strings internally, which is what every
/// property in this domain is at rest (image ids, versions, file names,
/// repository URLs). The [`parse`](PropValue::parse) method covers the rare
/// case where a value must be read as another type.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::prop_value::PropValue;
///
/// let value = PropValue::from("ami-00000000");
/// assert_eq!(value.as_str(), "ami-00000000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropValue(String);

impl PropValue {
    /// Creates a new `PropValue` from a `String`.
    pub fn new(value: String) -> Self {
        PropValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipecfg::domain::prop_value::PropValue;
    ///
    /// let value = PropValue::from("443");
    /// let port: u16 = value.parse("serverPort").unwrap();
    /// assert_eq!(port, 443);
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0.parse::<T>().map_err(|e| PropError::ParseError {
            message: format!(
                "value for key '{}' is not a valid {}",
                key,
                std::any::type_name::<T>()
            ),
            source: Some(Box::new(e)),
        })
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue(s)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue(s.to_string())
    }
}

impl From<PropValue> for String {
    fn from(value: PropValue) -> Self {
        value.0
    }
}

impl AsRef<str> for PropValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

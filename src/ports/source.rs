// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only parameter source trait definition.
//!
//! This module defines the `PropSource` trait, the port for read-only
//! configuration inputs to a pipeline stage (for example the CI-injected
//! parameters blob). Unlike [`crate::ports::PropStore`], a source cannot be
//! mutated or committed, and an absent key is an `Ok(None)` rather than an
//! error.

use crate::domain::{PropKey, PropValue, Result};

/// A read-only source of named parameters.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```rust
/// use pipecfg::ports::PropSource;
/// use pipecfg::domain::{PropKey, PropValue, Result};
///
/// struct MySource;
///
/// impl PropSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn get(&self, key: &PropKey) -> Result<Option<PropValue>> {
///         Ok(None)
///     }
///
///     fn all_keys(&self) -> Result<Vec<PropKey>> {
///         Ok(vec![])
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait PropSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// Used for logging and error messages. It should be a short,
    /// descriptive identifier like "params-env".
    fn name(&self) -> &str;

    /// Retrieves a parameter value for the given key.
    ///
    /// Returns `Ok(Some(value))` if the key exists in this source,
    /// `Ok(None)` if it does not, or `Err` if the source itself failed.
    fn get(&self, key: &PropKey) -> Result<Option<PropValue>>;

    /// Returns all keys available in this source.
    fn all_keys(&self) -> Result<Vec<PropKey>>;

    /// Reloads the source from its backing data.
    ///
    /// For sources whose data cannot change within a stage this can be a
    /// no-op that returns `Ok(())`.
    fn reload(&mut self) -> Result<()>;

    /// Retrieves a parameter value for the given key string.
    ///
    /// Convenience for `get(&PropKey::from(key))`.
    fn get_str(&self, key: &str) -> Result<Option<PropValue>> {
        self.get(&PropKey::from(key))
    }
}

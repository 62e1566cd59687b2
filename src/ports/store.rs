// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property store trait definition.
//!
//! This module defines the `PropStore` trait, the read-modify-write port over
//! durable key/value pipeline state. A store is bound to one backing file for
//! the duration of a build stage; mutations are visible to `get`/`has`
//! immediately and reach disk on `commit`.

use crate::domain::{PropKey, PropValue, Result};

/// A mutable key/value store backed by a single file.
///
/// Implementations own their backing file exclusively for the duration of a
/// pipeline stage: there is no locking and no concurrent-writer detection.
/// Callers sequence access (one stage writes the AMI id file, a later stage
/// reads it, with no overlap).
///
/// # Examples
///
/// ```rust
/// use pipecfg::ports::PropStore;
/// use pipecfg::domain::{PropError, PropKey, PropValue, Result};
/// use std::collections::HashMap;
///
/// struct MemStore {
///     values: HashMap<String, String>,
/// }
///
/// impl PropStore for MemStore {
///     fn get(&self, key: &PropKey) -> Result<PropValue> {
///         self.values
///             .get(key.as_str())
///             .map(|v| PropValue::from(v.as_str()))
///             .ok_or_else(|| PropError::KeyNotFound {
///                 key: key.as_str().to_string(),
///             })
///     }
///
///     fn has(&self, key: &PropKey) -> bool {
///         self.values.contains_key(key.as_str())
///     }
///
///     fn set(&mut self, key: &PropKey, value: &PropValue) -> Result<()> {
///         self.values
///             .insert(key.as_str().to_string(), value.as_str().to_string());
///         Ok(())
///     }
///
///     fn commit(&self) -> Result<()> {
///         Ok(())
///     }
///
///     fn keys(&self) -> Vec<PropKey> {
///         self.values.keys().map(|k| PropKey::from(k.as_str())).collect()
///     }
/// }
/// ```
pub trait PropStore {
    /// Retrieves the value for the given key.
    ///
    /// Fails with [`crate::domain::PropError::KeyNotFound`] when the key is
    /// absent; no default is ever substituted.
    fn get(&self, key: &PropKey) -> Result<PropValue>;

    /// Returns true iff the key is present. Never errors.
    fn has(&self, key: &PropKey) -> bool;

    /// Sets a key to a value in memory.
    ///
    /// An absent key is appended after all existing entries; a present key is
    /// rewritten in place. The change is visible to `get`/`has` immediately,
    /// before any `commit`.
    fn set(&mut self, key: &PropKey, value: &PropValue) -> Result<()>;

    /// Persists the current in-memory state to the backing file, truncating
    /// and replacing all prior content.
    fn commit(&self) -> Result<()>;

    /// Returns the store's keys in file order (first occurrence).
    fn keys(&self) -> Vec<PropKey>;

    /// Retrieves the value for the given key string.
    ///
    /// Convenience for `get(&PropKey::from(key))`.
    fn get_str(&self, key: &str) -> Result<PropValue> {
        self.get(&PropKey::from(key))
    }

    /// Sets a key string to a value string.
    ///
    /// Convenience for `set(&PropKey::from(key), &PropValue::from(value))`.
    fn set_str(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(&PropKey::from(key), &PropValue::from(value))
    }
}

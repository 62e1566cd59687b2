// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-backed pipeline state store adapter.
//!
//! Some pipeline state is richer than flat strings (lists of regions,
//! nested build descriptors) and lives in a small JSON object file instead
//! of a properties file. This adapter keeps that file in sync with an owned
//! in-memory map: every mutation persists immediately, so a stage killed
//! mid-run leaves the last completed mutation on disk.

use crate::domain::{PropError, PropKey, PropValue, Result};
use crate::ports::PropStore;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A key/value store persisted as a pretty-printed JSON object.
///
/// The mapping interface is explicit: [`value`](Self::value),
/// [`insert`](Self::insert), [`remove`](Self::remove), and iteration over an
/// owned `serde_json::Map`, with `persist()` called after every mutation.
/// Construction merges a defaults map with any existing file contents (file
/// wins) and persists the merged state immediately. Keys are kept in sorted
/// order, so the persisted output is deterministic.
///
/// The store also implements [`PropStore`] so pipeline code can treat JSON
/// state and property files uniformly; through that interface values are
/// plain strings, and `commit` simply re-persists.
///
/// # Examples
///
/// ```rust,no_run
/// use pipecfg::adapters::JsonStateStore;
/// use serde_json::{json, Map};
///
/// # fn main() -> pipecfg::domain::Result<()> {
/// let mut defaults = Map::new();
/// defaults.insert("backend".to_string(), json!("aws"));
///
/// let mut state = JsonStateStore::open("persisted_params.json", defaults)?;
/// state.insert("regions", json!(["us-east-1", "us-west-2"]))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    /// Path to the backing JSON file
    path: PathBuf,
    /// Owned state, persisted after every mutation
    values: Map<String, Value>,
}

impl JsonStateStore {
    /// Opens a state store over `path`, seeding it with `defaults`.
    ///
    /// If the file exists its entries are loaded on top of the defaults
    /// (file wins); either way the merged state is persisted immediately.
    /// A file that is not a JSON object fails with
    /// [`PropError::ParseError`].
    pub fn open<P: AsRef<Path>>(path: P, defaults: Map<String, Value>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut values = defaults;
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let loaded: Map<String, Value> =
                serde_json::from_str(&text).map_err(|e| PropError::ParseError {
                    message: format!("state file {} is not a JSON object", path.display()),
                    source: Some(Box::new(e)),
                })?;
            for (key, value) in loaded {
                values.insert(key, value);
            }
        }
        let store = JsonStateStore { path, values };
        store.persist()?;
        Ok(store)
    }

    /// Opens a state store with no defaults.
    pub fn open_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, Map::new())
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the JSON value for `key`, if present.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Inserts a JSON value under `key` and persists.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        self.values.insert(key.into(), value);
        self.persist()
    }

    /// Removes `key` and persists; returns the removed value, if any.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.values).map_err(|e| {
            PropError::ParseError {
                message: "state is not serializable".to_string(),
                source: Some(Box::new(e)),
            }
        })?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn stringify(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl PropStore for JsonStateStore {
    fn get(&self, key: &PropKey) -> Result<PropValue> {
        self.values
            .get(key.as_str())
            .map(|v| PropValue::from(Self::stringify(v)))
            .ok_or_else(|| PropError::KeyNotFound {
                key: key.as_str().to_string(),
            })
    }

    fn has(&self, key: &PropKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    fn set(&mut self, key: &PropKey, value: &PropValue) -> Result<()> {
        self.insert(key.as_str(), Value::String(value.as_str().to_string()))
    }

    fn commit(&self) -> Result<()> {
        self.persist()
    }

    fn keys(&self) -> Vec<PropKey> {
        self.values
            .keys()
            .map(|k| PropKey::from(k.as_str()))
            .collect()
    }
}

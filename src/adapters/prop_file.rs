// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-preserving property file store adapter.
//!
//! This is the core of the crate: a [`PropStore`] over a flat text file of
//! `key=value` (properties) or `key: value` (build metadata) lines. The
//! whole file is held in memory as a raw document so that comments, blank
//! lines, and ordering survive every edit; `set` touches only the affected
//! line, and `commit` writes the document back verbatim.

use crate::domain::{LineFormat, PropError, PropKey, PropValue, Result};
use crate::ports::PropStore;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A property store backed by a single line-oriented text file.
///
/// The store keeps two views of the file: the raw document (every byte,
/// including lines that are not key/value entries) and a parsed key→value
/// mapping for lookup. Lines that do not match the format's grammar are
/// invisible to `get`/`has` but preserved in the document, so loading a file
/// and committing it without mutation reproduces the original bytes exactly.
///
/// One store instance owns its backing file for the duration of a pipeline
/// stage; there is no locking and concurrent writers race last-writer-wins.
///
/// # Examples
///
/// ```rust,no_run
/// use pipecfg::adapters::PropFileStore;
/// use pipecfg::ports::PropStore;
///
/// # fn main() -> pipecfg::domain::Result<()> {
/// // durable pipeline state, created on first use
/// let mut ids = PropFileStore::properties("amiId.properties", true)?;
/// ids.set_str("scylla_ami_id", "ami-00000000")?;
/// ids.commit()?;
///
/// // static configuration, must already exist
/// let general = PropFileStore::properties("general.properties", false)?;
/// let metadata_file = general.get_str("buildMetadataFile")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PropFileStore {
    /// Path to the backing file
    path: PathBuf,
    /// Lexical variant of the file
    format: LineFormat,
    /// Raw file content, preserved byte-for-byte outside edited lines
    document: String,
    /// Parsed key/value entries (last occurrence wins)
    values: HashMap<String, String>,
    /// Whether malformed lines abort parsing instead of being skipped
    strict: bool,
}

impl PropFileStore {
    /// Opens a store over `path` with the given line format.
    ///
    /// When `create_if_missing` is true and the file does not exist, an
    /// empty file is created before loading. Otherwise a missing file fails
    /// with [`PropError::FileNotFound`].
    ///
    /// Lines that do not match the format's grammar are silently skipped
    /// (but preserved in the document); use [`open_strict`](Self::open_strict)
    /// to surface them as errors instead.
    pub fn open<P: AsRef<Path>>(
        path: P,
        format: LineFormat,
        create_if_missing: bool,
    ) -> Result<Self> {
        Self::open_inner(path, format, create_if_missing, false)
    }

    /// Opens a store like [`open`](Self::open), but fails with
    /// [`PropError::MalformedLine`] on any non-blank, non-comment line that
    /// does not match the format's grammar.
    pub fn open_strict<P: AsRef<Path>>(
        path: P,
        format: LineFormat,
        create_if_missing: bool,
    ) -> Result<Self> {
        Self::open_inner(path, format, create_if_missing, true)
    }

    /// Opens a properties-variant store (`key=value`).
    pub fn properties<P: AsRef<Path>>(path: P, create_if_missing: bool) -> Result<Self> {
        Self::open(path, LineFormat::PROPERTIES, create_if_missing)
    }

    /// Opens a build-metadata-variant store (`key: value`).
    pub fn build_metadata<P: AsRef<Path>>(path: P, create_if_missing: bool) -> Result<Self> {
        Self::open(path, LineFormat::BUILD_METADATA, create_if_missing)
    }

    fn open_inner<P: AsRef<Path>>(
        path: P,
        format: LineFormat,
        create_if_missing: bool,
        strict: bool,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            if create_if_missing {
                fs::File::create(&path)?;
                tracing::debug!("created empty property file {}", path.display());
            } else {
                return Err(PropError::FileNotFound { path });
            }
        }
        let document = fs::read_to_string(&path)?;
        let values = Self::parse(&document, &format, strict)?;
        tracing::debug!(
            "loaded {} with {} entries",
            path.display(),
            values.len()
        );
        Ok(PropFileStore {
            path,
            format,
            document,
            values,
            strict,
        })
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the store's line format.
    pub fn format(&self) -> LineFormat {
        self.format
    }

    /// Returns the raw document text as it would be written by `commit`.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Re-reads the backing file, discarding uncommitted in-memory changes.
    pub fn reload(&mut self) -> Result<()> {
        self.document = fs::read_to_string(&self.path)?;
        self.values = Self::parse(&self.document, &self.format, self.strict)?;
        Ok(())
    }

    fn parse(
        document: &str,
        format: &LineFormat,
        strict: bool,
    ) -> Result<HashMap<String, String>> {
        let mut values = HashMap::new();
        for (idx, line) in document.lines().enumerate() {
            match format.split_line(line) {
                Some((key, value)) => {
                    values.insert(key.to_string(), value.to_string());
                }
                None => {
                    if strict && !is_ignorable(line) {
                        return Err(PropError::MalformedLine {
                            line_no: idx + 1,
                            line: line.to_string(),
                        });
                    }
                }
            }
        }
        Ok(values)
    }

    /// Replaces every line whose parsed key equals `key` with the rendered
    /// new entry, leaving all other bytes untouched. Matching is exact key
    /// equality after splitting at the separator, never pattern
    /// substitution, so keys containing regex metacharacters are safe.
    fn rewrite(&mut self, key: &str, value: &str) {
        let mut out = String::with_capacity(self.document.len() + value.len());
        for segment in self.document.split_inclusive('\n') {
            let content = segment.strip_suffix('\n').unwrap_or(segment);
            let content = content.strip_suffix('\r').unwrap_or(content);
            let terminator = &segment[content.len()..];
            match self.format.split_line(content) {
                Some((k, _)) if k == key => {
                    out.push_str(&self.format.render(key, value));
                    if terminator.is_empty() {
                        // the matched line was the unterminated final line
                        out.push('\n');
                    } else {
                        out.push_str(terminator);
                    }
                }
                _ => out.push_str(segment),
            }
        }
        self.document = out;
    }

    fn append(&mut self, key: &str, value: &str) {
        if !self.document.is_empty() && !self.document.ends_with('\n') {
            self.document.push('\n');
        }
        self.document.push_str(&self.format.render(key, value));
        self.document.push('\n');
    }
}

fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

impl PropStore for PropFileStore {
    fn get(&self, key: &PropKey) -> Result<PropValue> {
        self.values
            .get(key.as_str())
            .map(|v| PropValue::from(v.as_str()))
            .ok_or_else(|| PropError::KeyNotFound {
                key: key.as_str().to_string(),
            })
    }

    fn has(&self, key: &PropKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    fn set(&mut self, key: &PropKey, value: &PropValue) -> Result<()> {
        if self.has(key) {
            self.rewrite(key.as_str(), value.as_str());
        } else {
            self.append(key.as_str(), value.as_str());
        }
        // keep lookups consistent with the document before commit
        self.values = Self::parse(&self.document, &self.format, self.strict)?;
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        fs::write(&self.path, &self.document)?;
        tracing::debug!(
            "committed {} bytes to {}",
            self.document.len(),
            self.path.display()
        );
        Ok(())
    }

    fn keys(&self) -> Vec<PropKey> {
        let mut keys: Vec<PropKey> = Vec::new();
        for line in self.document.lines() {
            if let Some((k, _)) = self.format.split_line(line) {
                if !keys.iter().any(|seen| seen.as_str() == k) {
                    keys.push(PropKey::from(k));
                }
            }
        }
        keys
    }
}

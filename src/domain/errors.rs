// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the crate.
//!
//! This module defines the error types that can occur when working with
//! property files, pipeline state, and the subprocess/fetch ports. All errors
//! use `thiserror` for proper error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for property store and pipeline operations.
///
/// This enum represents all possible errors that can occur when opening,
/// reading, or mutating a store, scraping a build log, or driving one of the
/// collaborator ports. It is marked as `#[non_exhaustive]` to allow for
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::errors::PropError;
///
/// fn lookup() -> Result<String, PropError> {
///     Err(PropError::KeyNotFound {
///         key: "scylla_ami_id".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PropError {
    /// The backing file was absent and creation was not requested.
    #[error("property file not found: {}", .path.display())]
    FileNotFound {
        /// The path that did not exist
        path: PathBuf,
    },

    /// The requested key was not present in the store.
    #[error("property key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A line did not match the store's line grammar (strict mode only).
    ///
    /// The default open mode silently skips such lines while preserving them
    /// in the raw document.
    #[error("malformed property line {line_no}: {line:?}")]
    MalformedLine {
        /// 1-based line number within the document
        line_no: usize,
        /// The offending line text
        line: String,
    },

    /// Failed to parse structured input (JSON state file, parameters blob).
    #[error("failed to parse: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A build log contained no line matching the expected provider pattern.
    ///
    /// Absence of a match means the image build failed.
    #[error("no match for pattern {pattern:?} in build log")]
    PatternNotFound {
        /// The pattern that failed to match
        pattern: String,
    },

    /// A subprocess exited with a non-zero status.
    #[error("command '{command}' failed with exit code {code:?}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// An error occurred in a source or fetcher collaborator.
    #[error("source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing a backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for property store operations.
pub type Result<T> = std::result::Result<T, PropError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error() {
        let error = PropError::FileNotFound {
            path: Path::new("/var/tmp/amiId.properties").to_path_buf(),
        };
        assert_eq!(
            error.to_string(),
            "property file not found: /var/tmp/amiId.properties"
        );
    }

    #[test]
    fn test_key_not_found_error() {
        let error = PropError::KeyNotFound {
            key: "scylla_ami_id".to_string(),
        };
        assert_eq!(error.to_string(), "property key not found: scylla_ami_id");
    }

    #[test]
    fn test_malformed_line_error() {
        let error = PropError::MalformedLine {
            line_no: 3,
            line: "no delimiter here".to_string(),
        };
        assert!(error.to_string().contains("line 3"));
        assert!(error.to_string().contains("no delimiter here"));
    }

    #[test]
    fn test_pattern_not_found_error() {
        let error = PropError::PatternNotFound {
            pattern: "^us-east-1: (.+)$".to_string(),
        };
        assert!(error.to_string().contains("us-east-1"));
    }

    #[test]
    fn test_command_failed_error() {
        let error = PropError::CommandFailed {
            command: "dpackager ./build_deb_ami.sh".to_string(),
            code: Some(1),
        };
        assert!(error.to_string().contains("dpackager"));
        assert!(error.to_string().contains('1'));
    }

    #[test]
    fn test_source_error() {
        let error = PropError::SourceError {
            source_name: "params-env".to_string(),
            message: "variable not set".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "source 'params-env' error: variable not set"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PropError::from(io_error);
        assert!(matches!(error, PropError::Io(_)));
    }
}

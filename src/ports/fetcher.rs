// SPDX-License-Identifier: MIT OR Apache-2.0

//! CI-server artifact retrieval port.
//!
//! The build-metadata artifact of an upstream job is fetched by name from the
//! CI server. Only the interface lives here; the HTTP client behind it
//! belongs to the orchestration layer.

use crate::domain::Result;
use std::fmt;

/// A reference to one build of a CI job.
///
/// # Examples
///
/// ```
/// use pipecfg::ports::BuildRef;
///
/// assert_eq!(BuildRef::Number(1234).to_string(), "1234");
/// assert_eq!(BuildRef::LastSuccessful.to_string(), "lastSuccessfulBuild");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildRef {
    /// A specific build number.
    Number(u64),
    /// The most recent successful build of the job.
    LastSuccessful,
}

impl fmt::Display for BuildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildRef::Number(n) => write!(f, "{}", n),
            BuildRef::LastSuccessful => write!(f, "lastSuccessfulBuild"),
        }
    }
}

/// A trait for fetching the textual contents of a named build artifact.
///
/// Fetch failures surface as [`crate::domain::PropError::SourceError`].
///
/// # Examples
///
/// ```rust
/// use pipecfg::ports::{ArtifactFetcher, BuildRef};
/// use pipecfg::domain::Result;
///
/// struct FixedFetcher;
///
/// impl ArtifactFetcher for FixedFetcher {
///     fn fetch(&self, _job: &str, _build: &BuildRef, _artifact: &str) -> Result<String> {
///         Ok("scylla-product: scylla\n".to_string())
///     }
/// }
///
/// let fetcher = FixedFetcher;
/// let text = fetcher
///     .fetch("scylla-master/next", &BuildRef::LastSuccessful, "00-Build.txt")
///     .unwrap();
/// assert!(text.starts_with("scylla-product"));
/// ```
pub trait ArtifactFetcher {
    /// Returns the contents of `artifact` from the given build of `job`.
    fn fetch(&self, job: &str, build: &BuildRef, artifact: &str) -> Result<String>;
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metadata stage: fetch the upstream build-metadata artifact and read
//! fields from it.
//!
//! The artifact is written to a local path before parsing so later steps of
//! the same stage (and humans debugging a run) can inspect exactly what the
//! CI server returned.

use crate::adapters::PropFileStore;
use crate::domain::{PropValue, Result};
use crate::ports::{ArtifactFetcher, BuildRef, PropStore};
use std::fs;
use std::path::Path;

/// Fetches the named build-metadata artifact, writes it to `dest`, and opens
/// it as a build-metadata store.
///
/// # Examples
///
/// ```rust,no_run
/// use pipecfg::ports::{ArtifactFetcher, BuildRef, PropStore};
/// use pipecfg::stage::fetch_build_metadata;
/// # struct Ci;
/// # impl ArtifactFetcher for Ci {
/// #     fn fetch(&self, _: &str, _: &BuildRef, _: &str) -> pipecfg::domain::Result<String> {
/// #         Ok(String::new())
/// #     }
/// # }
///
/// # fn main() -> pipecfg::domain::Result<()> {
/// # let ci = Ci;
/// let metadata = fetch_build_metadata(
///     &ci,
///     "scylla-master/next",
///     &BuildRef::LastSuccessful,
///     "00-Build.txt",
///     "00-Build.txt".as_ref(),
/// )?;
/// let version = metadata.get_str("scylla-version")?;
/// # Ok(())
/// # }
/// ```
pub fn fetch_build_metadata(
    fetcher: &dyn ArtifactFetcher,
    job: &str,
    build: &BuildRef,
    artifact: &str,
    dest: &Path,
) -> Result<PropFileStore> {
    tracing::info!("fetching artifact '{}' from {}/{}", artifact, job, build);
    let text = fetcher.fetch(job, build, artifact)?;
    fs::write(dest, &text)?;
    PropFileStore::build_metadata(dest, false)
}

/// Fetches the build-metadata artifact and resolves a single field.
///
/// Fails with [`crate::domain::PropError::KeyNotFound`] when the artifact
/// does not carry the field.
pub fn fetch_metadata_value(
    fetcher: &dyn ArtifactFetcher,
    job: &str,
    build: &BuildRef,
    artifact: &str,
    dest: &Path,
    field: &str,
) -> Result<PropValue> {
    let metadata = fetch_build_metadata(fetcher, job, build, artifact, dest)?;
    metadata.get_str(field)
}

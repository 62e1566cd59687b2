// SPDX-License-Identifier: MIT OR Apache-2.0

//! A line-preserving property file store for cloud image build pipelines.
//!
//! This crate provides the small persistent key/value layer shared by the CI
//! stages that build and test cloud machine images (AWS AMI, GCE image) of a
//! database product: flat text property files with get/set/commit semantics
//! and minimal-diff in-place updates, plus the ports those stages use to
//! invoke the packaging tool and fetch build metadata.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and pure logic (`PropKey`, `PropValue`,
//!   `LineFormat`, build-log scanning, errors)
//! - **Ports**: Trait definitions that define interfaces (`PropStore`,
//!   `PropSource`, `CommandRunner`, `ArtifactFetcher`)
//! - **Adapters**: Implementations for specific backends (property files,
//!   JSON state files, CI parameter blobs, subprocesses)
//! - **Stage**: Thin composition of the ports into the pipeline data flow
//!   (build image, scrape the log, persist the id)
//!
//! # File formats
//!
//! Two lexical variants of the same line-oriented format are supported:
//!
//! - **Properties**: `scylla_ami_id=ami-0123` (no spaces)
//! - **Build metadata**: `scylla-version: 5.0.0` (colon + one space)
//!
//! Loading a file and committing it unchanged reproduces the original bytes;
//! `set` rewrites only the affected line.
//!
//! # Feature Flags
//!
//! - `state`: Enable the JSON-backed pipeline state store (default)
//! - `params`: Enable the CI parameters environment source (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pipecfg::prelude::*;
//!
//! # fn main() -> pipecfg::domain::Result<()> {
//! let mut store = PropFileStore::properties("amiId.properties", true)?;
//! store.set_str("scylla_ami_id", "ami-00000000")?;
//! store.commit()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod stage;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ImageIdPattern, LineFormat, PropError, PropKey, PropValue, Result};
    pub use crate::ports::{ArtifactFetcher, BuildRef, CommandRunner, CommandSpec};
    pub use crate::ports::{PropSource, PropStore};

    pub use crate::adapters::{ProcessRunner, PropFileStore};

    // Re-export adapters based on feature flags
    #[cfg(feature = "params")]
    pub use crate::adapters::ParamsEnvSource;
    #[cfg(feature = "state")]
    pub use crate::adapters::JsonStateStore;
}

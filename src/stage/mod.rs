// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stage layer composing the ports into the pipeline data flow.
//!
//! A build stage runs the packaging command, scrapes the created image id
//! out of its log, and persists it for downstream stages; a metadata stage
//! fetches the upstream build-metadata artifact and reads fields from it.
//! Everything here is thin composition — the heavy lifting lives in the
//! adapters and domain layers.

pub mod image_build;
pub mod metadata;

// Re-export commonly used items
pub use image_build::ImageBuildStage;
pub use metadata::{fetch_build_metadata, fetch_metadata_value};

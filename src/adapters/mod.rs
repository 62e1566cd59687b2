// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the traits defined in
//! the ports layer: the line-preserving property file store, the JSON state
//! store, the CI parameters source, and the local subprocess runner.

#[cfg(feature = "state")]
pub mod json_state;
#[cfg(feature = "params")]
pub mod params_env;
pub mod process;
pub mod prop_file;

// Re-export adapters based on feature flags
#[cfg(feature = "state")]
pub use json_state::JsonStateStore;
#[cfg(feature = "params")]
pub use params_env::ParamsEnvSource;
pub use process::ProcessRunner;
pub use prop_file::PropFileStore;

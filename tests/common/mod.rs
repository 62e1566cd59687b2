// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration test suites.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes a fixture file under `dir` and returns its path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Installs a test-writer tracing subscriber once per process.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

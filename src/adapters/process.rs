// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subprocess runner adapter.
//!
//! Runs a [`CommandSpec`] via `std::process::Command`: the spec's
//! environment is applied on top of the inherited process environment, the
//! command is waited on, and a non-zero exit becomes
//! [`crate::domain::PropError::CommandFailed`]. No shell is involved;
//! arguments are passed as given.

use crate::domain::{PropError, Result};
use crate::ports::{CommandRunner, CommandSpec};
use std::process::Command;

/// A [`CommandRunner`] over local child processes.
///
/// # Examples
///
/// ```rust,no_run
/// use pipecfg::adapters::ProcessRunner;
/// use pipecfg::ports::{CommandRunner, CommandSpec};
///
/// # fn main() -> pipecfg::domain::Result<()> {
/// let runner = ProcessRunner::new();
/// let spec = CommandSpec::new("./tools/packaging/dpackager")
///     .args(["./build_deb_ami.sh", "--product", "scylla"])
///     .env("DPACKAGER_TOOL", "podman");
/// runner.run(&spec)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Creates a new runner.
    pub fn new() -> Self {
        ProcessRunner
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<()> {
        let mut command = Command::new(spec.program());
        command.args(spec.arg_list());
        if let Some(dir) = spec.working_dir() {
            command.current_dir(dir);
        }
        for (key, value) in spec.env_vars() {
            command.env(key, value);
        }

        tracing::info!("running command: {}", spec);
        let status = command.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(PropError::CommandFailed {
                command: spec.to_string(),
                code: status.code(),
            })
        }
    }
}

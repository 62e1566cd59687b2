// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subprocess invocation port.
//!
//! Pipeline stages shell out to the packaging tool and to the external test
//! suite. The parameters those tools need travel in an explicit
//! [`CommandSpec`] value — program, arguments, working directory, and an
//! environment map applied on top of the inherited process environment —
//! never through ambient global state.

use crate::domain::Result;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A fully described subprocess invocation.
///
/// The `env` map is layered over the parent process environment when the
/// command runs; it does not replace it. This mirrors how build stages pass
/// tool selection (`DPACKAGER_TOOL`, `DOCKER_IMAGE`) and test parameters
/// (image id, region, instance type) to their subprocesses.
///
/// # Examples
///
/// ```
/// use pipecfg::ports::CommandSpec;
///
/// let spec = CommandSpec::new("./tools/packaging/dpackager")
///     .arg("./build_deb_ami.sh")
///     .args(["--product", "scylla"])
///     .current_dir("./machine-image/aws/ami")
///     .env("DPACKAGER_TOOL", "podman")
///     .env("DOCKER_IMAGE", "image_ubuntu20.04");
///
/// assert_eq!(spec.program(), "./tools/packaging/dpackager");
/// assert_eq!(spec.env_vars().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
}

impl CommandSpec {
    /// Creates a spec for the given program with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory the command runs in.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Adds one environment variable, layered over the parent environment.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Returns the program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the argument list.
    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    /// Returns the working directory, if one was set.
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Iterates over the extra environment variables.
    pub fn env_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A trait for running fully described subprocess invocations.
///
/// `run` blocks until the command exits. A non-zero exit status becomes
/// [`crate::domain::PropError::CommandFailed`], carrying the exit code so
/// callers can propagate it; this is also the pass/fail signal of the
/// external test-suite interface.
///
/// # Examples
///
/// ```rust
/// use pipecfg::ports::{CommandRunner, CommandSpec};
/// use pipecfg::domain::Result;
///
/// struct NoopRunner;
///
/// impl CommandRunner for NoopRunner {
///     fn run(&self, _spec: &CommandSpec) -> Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion.
    fn run(&self, spec: &CommandSpec) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder() {
        let spec = CommandSpec::new("sh")
            .arg("-c")
            .arg("true")
            .env("SCT_REGION_NAME", "us-east-1");

        assert_eq!(spec.program(), "sh");
        assert_eq!(spec.arg_list(), &["-c".to_string(), "true".to_string()]);
        assert_eq!(
            spec.env_vars().collect::<Vec<_>>(),
            vec![("SCT_REGION_NAME", "us-east-1")]
        );
        assert!(spec.working_dir().is_none());
    }

    #[test]
    fn test_spec_display() {
        let spec = CommandSpec::new("hydra.sh")
            .args(["run-test", "artifacts_test", "--backend", "aws"]);
        assert_eq!(
            spec.to_string(),
            "hydra.sh run-test artifacts_test --backend aws"
        );
    }

    #[test]
    fn test_env_is_sorted_and_deduplicated() {
        let spec = CommandSpec::new("x")
            .env("B", "2")
            .env("A", "1")
            .env("B", "3");
        assert_eq!(
            spec.env_vars().collect::<Vec<_>>(),
            vec![("A", "1"), ("B", "3")]
        );
    }

    #[test]
    fn test_runner_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CommandRunner>();
    }
}

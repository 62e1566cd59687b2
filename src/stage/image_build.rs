// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image build stage: run the packaging command, extract the created image
//! id from its log, persist the id for downstream stages.

use crate::adapters::PropFileStore;
use crate::domain::{extract_image_id, ImageIdPattern, PropKey, PropValue, Result};
use crate::ports::{CommandRunner, CommandSpec, PropStore};
use std::fs;
use std::path::{Path, PathBuf};

/// One image build of the pipeline, described end to end.
///
/// Running the stage executes the packaging command, reads the log file the
/// command was told to write, extracts the created image identifier with the
/// provider pattern, and persists it under `id_key` into a properties file
/// at `id_file` (created if missing). Any failing step aborts the stage: a
/// non-zero packaging exit propagates as `CommandFailed`, and a log without
/// the expected line is a failed build (`PatternNotFound`).
///
/// # Examples
///
/// ```rust,no_run
/// use pipecfg::adapters::ProcessRunner;
/// use pipecfg::domain::ImageIdPattern;
/// use pipecfg::ports::CommandSpec;
/// use pipecfg::stage::ImageBuildStage;
///
/// # fn main() -> pipecfg::domain::Result<()> {
/// let command = CommandSpec::new("../../../tools/packaging/dpackager")
///     .args(["--", "./build_deb_ami.sh", "--product", "scylla"])
///     .args(["--log-file", "build/ami.log"])
///     .current_dir("./machine-image/aws/ami")
///     .env("DPACKAGER_TOOL", "podman")
///     .env("DOCKER_IMAGE", "image_ubuntu20.04");
///
/// let stage = ImageBuildStage::new(
///     command,
///     "./machine-image/aws/ami/build/ami.log",
///     ImageIdPattern::AwsAmi,
///     "./amiId.properties",
///     "scylla_ami_id",
/// );
/// let ami_id = stage.run(&ProcessRunner::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImageBuildStage {
    command: CommandSpec,
    log_path: PathBuf,
    pattern: ImageIdPattern,
    id_file: PathBuf,
    id_key: PropKey,
}

impl ImageBuildStage {
    /// Describes a build stage.
    ///
    /// `log_path` is where the packaging command writes its log (the command
    /// itself is told via its own arguments); `id_file` and `id_key` name
    /// where the extracted image id is persisted.
    pub fn new(
        command: CommandSpec,
        log_path: impl Into<PathBuf>,
        pattern: ImageIdPattern,
        id_file: impl Into<PathBuf>,
        id_key: impl Into<PropKey>,
    ) -> Self {
        ImageBuildStage {
            command,
            log_path: log_path.into(),
            pattern,
            id_file: id_file.into(),
            id_key: id_key.into(),
        }
    }

    /// Returns the path of the log file this stage scans.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Runs the stage to completion and returns the created image id.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<String> {
        tracing::info!("starting image build: {}", self.command);
        runner.run(&self.command)?;

        let log = fs::read_to_string(&self.log_path)?;
        let image_id = extract_image_id(&log, self.pattern)?;
        tracing::info!("image created: {}", image_id);

        let mut store = PropFileStore::properties(&self.id_file, true)?;
        store.set(&self.id_key, &PropValue::from(image_id.as_str()))?;
        store.commit()?;
        tracing::info!(
            "persisted {}={} to {}",
            self.id_key,
            image_id,
            self.id_file.display()
        );
        Ok(image_id)
    }
}

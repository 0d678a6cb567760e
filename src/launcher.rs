//! Staging the downloaded binary on disk and handing control to it.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::InstallError;
use crate::runtime::{LaunchStatus, Runtime};

/// Where the downloaded client is written unless overridden.
pub const DEFAULT_STAGING_PATH: &str = "/tmp/hishtory-client";

/// The only argument the staged binary is invoked with.
pub const INSTALL_ARG: &str = "install";

const EXECUTABLE_MODE: u32 = 0o755;

/// A downloaded binary written to disk and marked executable. Nothing removes
/// it afterwards; the next run overwrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedArtifact {
    pub path: PathBuf,
    pub len: usize,
}

/// Writes `bytes` to `path` and sets the executable bits.
#[tracing::instrument(skip(runtime, bytes))]
pub fn stage_artifact<R: Runtime>(
    runtime: &R,
    bytes: &[u8],
    path: &Path,
) -> Result<StagedArtifact, InstallError> {
    debug!("Writing {} bytes to {:?}", bytes.len(), path);
    runtime.write(path, bytes).map_err(|e| InstallError::Stage {
        path: path.to_path_buf(),
        message: format!("{:#}", e),
    })?;

    runtime
        .set_permissions(path, EXECUTABLE_MODE)
        .map_err(|e| InstallError::Stage {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })?;

    Ok(StagedArtifact {
        path: path.to_path_buf(),
        len: bytes.len(),
    })
}

/// Runs `<artifact> install` with inherited stdio and waits for it.
#[tracing::instrument(skip(runtime))]
pub fn launch<R: Runtime>(
    runtime: &R,
    artifact: &StagedArtifact,
) -> Result<LaunchStatus, InstallError> {
    info!("Running {:?} {}", artifact.path, INSTALL_ARG);
    let status = runtime
        .run(&artifact.path, &[INSTALL_ARG.to_string()])
        .map_err(|e| InstallError::Launch {
            path: artifact.path.clone(),
            message: format!("{:#}", e),
        })?;
    debug!("Installer exited with {:?}", status.code);
    Ok(status)
}

/// Stages `bytes` at `path` and launches it.
pub fn stage_and_launch<R: Runtime>(
    runtime: &R,
    bytes: &[u8],
    path: &Path,
) -> Result<LaunchStatus, InstallError> {
    let artifact = stage_artifact(runtime, bytes, path)?;
    launch(runtime, &artifact)
}

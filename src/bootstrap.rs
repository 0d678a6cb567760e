//! The bootstrap flow: catalog fetch, URL resolution, artifact download,
//! staging and launch. Each step is awaited before the next one starts.

use log::info;
use std::path::PathBuf;

use crate::catalog::resolve_url;
use crate::error::InstallError;
use crate::launcher::stage_and_launch;
use crate::platform::HostPlatform;
use crate::runtime::{LaunchStatus, Runtime};
use crate::source::DownloadSource;

pub struct Bootstrap<R: Runtime, S: DownloadSource> {
    runtime: R,
    source: S,
    host: HostPlatform,
    staging_path: PathBuf,
}

impl<R: Runtime, S: DownloadSource> Bootstrap<R, S> {
    pub fn new(runtime: R, source: S, host: HostPlatform, staging_path: PathBuf) -> Self {
        Self {
            runtime,
            source,
            host,
            staging_path,
        }
    }

    /// Fetches a fresh catalog and picks this host's artifact URL.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self) -> Result<String, InstallError> {
        let catalog = self.source.fetch_catalog().await?;
        resolve_url(&catalog, &self.host)
    }

    /// Runs the whole flow and returns how the staged installer exited.
    /// Nothing is downloaded or written unless resolution succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn install(&self) -> Result<LaunchStatus, InstallError> {
        let url = self.resolve().await?;
        info!("Installing hishtory for {} from {}", self.host, url);

        let bytes = self.source.download_artifact(&url).await?;
        stage_and_launch(&self.runtime, &bytes, &self.staging_path)
    }
}

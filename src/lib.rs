pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod launcher;
pub mod platform;
pub mod runtime;
pub mod source;

use anyhow::Result;

use bootstrap::Bootstrap;
use config::{Config, Overrides};
use platform::HostPlatform;
use runtime::{LaunchStatus, Runtime};

/// Printed once the staged installer has finished.
pub const SUCCESS_MESSAGE: &str = "Successfully installed hishtory! Open a new terminal, try running a command, and then running `hishtory query`.";

/// Resolve the artifact URL for `host` without downloading anything.
#[tracing::instrument(skip(runtime, overrides))]
pub async fn print_url<R: Runtime>(
    runtime: R,
    host: HostPlatform,
    overrides: Overrides,
) -> Result<String> {
    let config = Config::new(&runtime, overrides);
    let bootstrap = Bootstrap::new(runtime, config.source()?, host, config.staging_path);
    Ok(bootstrap.resolve().await?)
}

/// Download the hishtory client for `host` and run its `install` subcommand.
#[tracing::instrument(skip(runtime, overrides))]
pub async fn install<R: Runtime>(
    runtime: R,
    host: HostPlatform,
    overrides: Overrides,
) -> Result<LaunchStatus> {
    let config = Config::new(&runtime, overrides);
    let bootstrap = Bootstrap::new(runtime, config.source()?, host, config.staging_path);
    Ok(bootstrap.install().await?)
}

use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::InstallError;
use crate::http::HttpClient;
use crate::launcher::DEFAULT_STAGING_PATH;
use crate::runtime::Runtime;
use crate::source::{DEFAULT_SERVER_URL, HishtoryApi};

/// Overrides the hishtory API server, as the hishtory client does.
pub const SERVER_ENV: &str = "HISHTORY_SERVER";

/// When non-empty, every HTTP request fails with a simulated network error.
pub const SIMULATE_NETWORK_ERROR_ENV: &str = "HISHTORY_SIMULATE_NETWORK_ERROR";

pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Values supplied on the command line. `None` falls back to the
/// environment and then to the built-in default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server_url: Option<String>,
    pub staging_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_url: String,
    pub staging_path: PathBuf,
    pub timeout: Duration,
    pub simulate_network_error: bool,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, overrides: Overrides) -> Self {
        let server_url = overrides
            .server_url
            .or_else(|| non_empty_env(runtime, SERVER_ENV))
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let simulate_network_error = non_empty_env(runtime, SIMULATE_NETWORK_ERROR_ENV).is_some();

        let config = Self {
            server_url,
            staging_path: overrides
                .staging_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGING_PATH)),
            timeout: overrides
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            simulate_network_error,
        };
        debug!("Using config: {:?}", config);
        config
    }

    /// Builds the API client this configuration describes.
    pub fn source(&self) -> Result<HishtoryApi, InstallError> {
        let http = HttpClient::build(self.timeout)?
            .with_simulated_network_error(self.simulate_network_error);
        Ok(HishtoryApi::new(http, self.server_url.clone()))
    }
}

fn non_empty_env<R: Runtime>(runtime: &R, key: &str) -> Option<String> {
    runtime.env_var(key).ok().filter(|v| !v.is_empty())
}

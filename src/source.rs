//! Remote side of the bootstrap: the catalog endpoint and artifact downloads.

use async_trait::async_trait;
use log::info;

use crate::catalog::{CATALOG_PATH, DownloadCatalog};
use crate::error::InstallError;
use crate::http::HttpClient;

/// Default hishtory API server.
pub const DEFAULT_SERVER_URL: &str = "https://api.hishtory.dev";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DownloadSource: Send + Sync {
    /// Fetches the platform to URL catalog. Never cached.
    async fn fetch_catalog(&self) -> Result<DownloadCatalog, InstallError>;

    /// Downloads the raw artifact at `url`.
    async fn download_artifact(&self, url: &str) -> Result<Vec<u8>, InstallError>;
}

/// [`DownloadSource`] backed by the hishtory HTTP API.
pub struct HishtoryApi {
    http: HttpClient,
    server_url: String,
}

impl HishtoryApi {
    pub fn new(http: HttpClient, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.server_url, CATALOG_PATH)
    }
}

#[async_trait]
impl DownloadSource for HishtoryApi {
    #[tracing::instrument(skip(self))]
    async fn fetch_catalog(&self) -> Result<DownloadCatalog, InstallError> {
        let url = self.catalog_url();
        info!("Fetching download catalog from {}...", url);
        self.http.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn download_artifact(&self, url: &str) -> Result<Vec<u8>, InstallError> {
        info!("Downloading hishtory from {}...", url);
        let bytes = self.http.get_bytes(url).await?;
        info!(
            "Download complete ({:.2} MB).",
            bytes.len() as f64 / (1024.0 * 1024.0)
        );
        Ok(bytes)
    }
}

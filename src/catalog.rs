//! The download catalog served by the hishtory API.

use serde::{Deserialize, Serialize};

use crate::error::InstallError;
use crate::platform::{HostPlatform, PlatformKey};

/// Path of the catalog endpoint, relative to the server base URL.
pub const CATALOG_PATH: &str = "/api/v1/download";

/// Mapping from platform to artifact URL. Fields are optional so that a
/// missing key only fails the platforms that need it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct DownloadCatalog {
    pub linux_amd_64_url: Option<String>,
    pub darwin_arm_64_url: Option<String>,
    pub darwin_amd_64_url: Option<String>,
}

impl DownloadCatalog {
    /// Returns the URL for `key`. Absent and empty entries are both errors.
    pub fn url_for(&self, key: PlatformKey) -> Result<&str, InstallError> {
        let entry = match key {
            PlatformKey::LinuxAmd64 => &self.linux_amd_64_url,
            PlatformKey::DarwinArm64 => &self.darwin_arm_64_url,
            PlatformKey::DarwinAmd64 => &self.darwin_amd_64_url,
        };

        match entry.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(InstallError::MissingCatalogKey {
                key: key.catalog_key(),
            }),
        }
    }
}

/// Resolves the artifact URL for `host` from `catalog`.
#[tracing::instrument(skip(catalog))]
pub fn resolve_url(catalog: &DownloadCatalog, host: &HostPlatform) -> Result<String, InstallError> {
    let key = PlatformKey::resolve(host)?;
    let url = catalog.url_for(key)?;
    log::debug!("Resolved {} ({}) to {}", host, key, url);
    Ok(url.to_string())
}

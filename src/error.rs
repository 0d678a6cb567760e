use std::path::PathBuf;
use thiserror::Error;

/// Where to send users whose platform has no prebuilt binary.
pub const ISSUES_URL: &str = "https://github.com/ddworken/hishtory/issues";

/// Every way a bootstrap run can fail before (or while) handing off to the
/// downloaded installer.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Network error while fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Download catalog has no usable entry for '{key}'")]
    MissingCatalogKey { key: &'static str },

    #[error(
        "No hishtory binary for system={os}, machine={arch}!\nIf you believe this is a mistake, please open an issue here: {issues}",
        issues = ISSUES_URL
    )]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Failed to stage installer at {path:?}: {message}")]
    Stage { path: PathBuf, message: String },

    #[error("Failed to launch installer at {path:?}: {message}")]
    Launch { path: PathBuf, message: String },
}

impl InstallError {
    pub(crate) fn network(url: &str, message: impl ToString) -> Self {
        InstallError::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn parse(url: &str, message: impl ToString) -> Self {
        InstallError::Parse {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// True for failures caused by the catalog contents rather than transport.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            InstallError::Parse { .. } | InstallError::MissingCatalogKey { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message() {
        let err = InstallError::UnsupportedPlatform {
            os: "Windows".to_string(),
            arch: "x86_64".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("No hishtory binary for system=Windows, machine=x86_64!"));
        assert!(msg.contains(ISSUES_URL));
    }

    #[test]
    fn test_is_parse_error() {
        assert!(InstallError::parse("http://x", "bad json").is_parse_error());
        assert!(
            InstallError::MissingCatalogKey {
                key: "linux_amd_64_url"
            }
            .is_parse_error()
        );
        assert!(!InstallError::network("http://x", "refused").is_parse_error());
    }
}

use std::fmt;

use crate::error::InstallError;

use super::HostPlatform;

/// The platforms a prebuilt hishtory binary exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    LinuxAmd64,
    DarwinArm64,
    DarwinAmd64,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 3] = [
        PlatformKey::LinuxAmd64,
        PlatformKey::DarwinArm64,
        PlatformKey::DarwinAmd64,
    ];

    /// Applies the static rule table to a host. OS names are matched
    /// case-insensitively; `amd64` and `aarch64` are accepted as aliases.
    /// Unlike the old install.py, which sent every Linux host the amd64
    /// binary, Linux is only matched on x86_64.
    pub fn resolve(host: &HostPlatform) -> Result<Self, InstallError> {
        let os = host.os.to_ascii_lowercase();
        let arch = host.arch.to_ascii_lowercase();

        match (os.as_str(), arch.as_str()) {
            ("linux", "x86_64" | "amd64") => Ok(PlatformKey::LinuxAmd64),
            ("darwin" | "macos", "arm64" | "aarch64") => Ok(PlatformKey::DarwinArm64),
            ("darwin" | "macos", "x86_64" | "amd64") => Ok(PlatformKey::DarwinAmd64),
            _ => Err(InstallError::UnsupportedPlatform {
                os: host.os.clone(),
                arch: host.arch.clone(),
            }),
        }
    }

    /// Name of the field in the download catalog that holds this key's URL.
    pub fn catalog_key(self) -> &'static str {
        match self {
            PlatformKey::LinuxAmd64 => "linux_amd_64_url",
            PlatformKey::DarwinArm64 => "darwin_arm_64_url",
            PlatformKey::DarwinAmd64 => "darwin_amd_64_url",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlatformKey::LinuxAmd64 => "linux/amd64",
            PlatformKey::DarwinArm64 => "darwin/arm64",
            PlatformKey::DarwinAmd64 => "darwin/amd64",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(os: &str, arch: &str) -> Result<PlatformKey, InstallError> {
        PlatformKey::resolve(&HostPlatform::new(os, arch))
    }

    #[test]
    fn test_resolve_supported_hosts() {
        assert_eq!(resolve("Linux", "x86_64").unwrap(), PlatformKey::LinuxAmd64);
        assert_eq!(resolve("Linux", "amd64").unwrap(), PlatformKey::LinuxAmd64);
        assert_eq!(resolve("Darwin", "arm64").unwrap(), PlatformKey::DarwinArm64);
        assert_eq!(resolve("Darwin", "aarch64").unwrap(), PlatformKey::DarwinArm64);
        assert_eq!(resolve("Darwin", "x86_64").unwrap(), PlatformKey::DarwinAmd64);
        assert_eq!(resolve("macos", "x86_64").unwrap(), PlatformKey::DarwinAmd64);
    }

    #[test]
    fn test_resolve_unsupported_hosts() {
        for (os, arch) in [
            ("Windows", "x86_64"),
            ("Linux", "arm64"),
            ("Linux", "aarch64"),
            ("FreeBSD", "x86_64"),
            ("Darwin", "ppc"),
        ] {
            match resolve(os, arch) {
                Err(InstallError::UnsupportedPlatform { os: o, arch: a }) => {
                    assert_eq!(o, os);
                    assert_eq!(a, arch);
                }
                other => panic!("Expected UnsupportedPlatform for {os}/{arch}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_catalog_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            PlatformKey::ALL.iter().map(|k| k.catalog_key()).collect();
        assert_eq!(keys.len(), PlatformKey::ALL.len());
        assert_eq!(PlatformKey::LinuxAmd64.catalog_key(), "linux_amd_64_url");
        assert_eq!(PlatformKey::DarwinArm64.catalog_key(), "darwin_arm_64_url");
        assert_eq!(PlatformKey::DarwinAmd64.catalog_key(), "darwin_amd_64_url");
    }
}

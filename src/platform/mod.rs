//! Platform detection and artifact key resolution
//!
//! This module turns "what machine am I on" into a [`PlatformKey`]. Detection
//! of the host is kept behind [`PlatformDetector`] so that everything
//! downstream works on an injected [`HostPlatform`] value.

mod key;

pub use key::PlatformKey;

use std::fmt;

/// The host's OS and architecture, named the way uname reports them
/// (`Linux`, `Darwin`, `x86_64`, `arm64`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

impl HostPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "Darwin".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "Linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "Windows".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64".to_string()
        }
        #[cfg(all(target_arch = "aarch64", target_os = "macos"))]
        {
            "arm64".to_string()
        }
        #[cfg(all(target_arch = "aarch64", not(target_os = "macos")))]
        {
            "aarch64".to_string()
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            std::env::consts::ARCH.to_string()
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Trait for platform detection (useful for testing)
#[cfg_attr(test, mockall::automock)]
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> HostPlatform;
}

/// Default platform detector using compile-time detection
pub struct DefaultPlatformDetector;

impl PlatformDetector for DefaultPlatformDetector {
    fn detect(&self) -> HostPlatform {
        HostPlatform::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detect() {
        let platform = HostPlatform::detect();

        assert!(!platform.os.is_empty());
        assert!(!platform.arch.is_empty());

        #[cfg(target_os = "macos")]
        assert_eq!(platform.os, "Darwin");

        #[cfg(target_os = "linux")]
        assert_eq!(platform.os, "Linux");

        #[cfg(target_os = "windows")]
        assert_eq!(platform.os, "Windows");

        #[cfg(target_arch = "x86_64")]
        assert_eq!(platform.arch, "x86_64");
    }

    #[test]
    fn test_default_platform_detector() {
        let detector = DefaultPlatformDetector;
        assert_eq!(detector.detect(), HostPlatform::detect());
    }

    #[test]
    fn test_host_platform_display() {
        let host = HostPlatform::new("Darwin", "arm64");
        assert_eq!(host.to_string(), "Darwin/arm64");
    }
}

//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the handful of system
//! operations the installer performs, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Environment variables
//! - `fs` - File system operations (write, permissions)
//! - `process` - Spawning the staged installer

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

pub use process::LaunchStatus;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // File System
    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// Set file permissions (mode) on Unix systems. No-op on Windows.
    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()>;

    // Process
    /// Run `program` with `args`, inheriting stdio, and wait for it to exit.
    fn run(&self, program: &Path, args: &[String]) -> Result<LaunchStatus>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn set_permissions(&self, path: &Path, mode: u32) -> Result<()> {
        self.set_permissions_impl(path, mode)
    }

    fn run(&self, program: &Path, args: &[String]) -> Result<LaunchStatus> {
        self.run_impl(program, args)
    }
}

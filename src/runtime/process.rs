//! Child process execution.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::RealRuntime;

/// How a launched child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    /// Exit code, or `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl LaunchStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for LaunchStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_impl(&self, program: &Path, args: &[String]) -> Result<LaunchStatus> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute {:?}", program))?;
        Ok(status.into())
    }
}

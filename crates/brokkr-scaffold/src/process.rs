//! Child process execution
//!
//! Package-manager invocations stream their output straight to the
//! operator's terminal, so the runner inherits stdio and only reports the
//! exit status. The trait seam exists so orchestration code can be tested
//! with a recording fake instead of spawning real processes.

use std::process::Stdio;

use async_trait::async_trait;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Exit outcome of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, None when the process was killed by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    /// Whether the process exited with code zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Abstraction over child process execution
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program in a working directory, streaming output to the
    /// terminal, and wait for it to exit
    async fn run(&self, program: &str, args: &[&str], cwd: &Utf8Path) -> Result<RunStatus>;
}

/// Runner backed by real system processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Utf8Path) -> Result<RunStatus> {
        debug!("Running: {} {} (cwd: {})", program, args.join(" "), cwd);

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::process_execution(format!("{program}: {e}")))?;

        Ok(RunStatus {
            code: status.code(),
        })
    }
}

/// Check if a command is available in PATH
pub fn command_exists(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

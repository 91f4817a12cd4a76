//! Synchronous git subprocess execution.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::ExecError;

/// Timeout for git commands (seconds).
pub const GIT_TIMEOUT_SECS: u64 = 30;

/// Captured result of a single git subcommand.
#[derive(Debug)]
pub struct GitOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Whether the subcommand exited 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Synchronous capability for running git subcommands.
///
/// The agent only talks to git through this trait, so tests can substitute
/// a scripted double instead of spawning the real binary.
pub trait GitRunner {
    /// Run exactly one git subcommand and capture its output.
    ///
    /// Returns `Err` only for the exceptional cases: the process could not
    /// be launched, or it did not finish within the timeout. A non-zero
    /// exit is an ordinary `Ok` result.
    fn run(&self, args: &[&str]) -> Result<GitOutput, ExecError>;
}

/// Runs `git` from PATH with the working directory pinned to a repository.
pub struct SystemGitRunner {
    repo_path: PathBuf,
}

impl SystemGitRunner {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }
}

impl GitRunner for SystemGitRunner {
    fn run(&self, args: &[&str]) -> Result<GitOutput, ExecError> {
        debug!("Running git command: git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.repo_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::null());

        let child = cmd.spawn().map_err(ExecError::SpawnFailed)?;

        // Bounded blocking wait: a helper thread collects the output while
        // this thread waits on the channel with the timeout. On timeout the
        // child is left to the OS; there is no compensating rollback.
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        match rx.recv_timeout(Duration::from_secs(GIT_TIMEOUT_SECS)) {
            Ok(result) => {
                let output = result.map_err(ExecError::SpawnFailed)?;
                Ok(GitOutput {
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                })
            }
            Err(_) => Err(ExecError::Timeout(GIT_TIMEOUT_SECS)),
        }
    }
}

//! The commit agent: repository validation, staging, and commit orchestration.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::commit::message::synthesize_message;
use crate::commit::result::CommitResult;
use crate::error::{ExecError, RepoError};
use crate::git::runner::{GitOutput, GitRunner, SystemGitRunner};
use crate::git::status::GitStatus;

/// Automated commit agent bound to one working tree.
///
/// Construction validates the repository once; after that every operation
/// re-reads live state through the runner. The agent issues subcommands to
/// its tree strictly one at a time and performs no internal caching.
/// Callers sharing a single tree across threads must serialize access
/// themselves, since concurrent git invocations contend over git's own
/// locking.
pub struct GitAgent<R: GitRunner = SystemGitRunner> {
    repo_path: PathBuf,
    runner: R,
}

impl GitAgent<SystemGitRunner> {
    /// Open an agent for the repository at `repo_path`.
    ///
    /// Fails when the path holds no git metadata or no `git` executable is
    /// reachable on PATH. This is the one unrecoverable failure of the
    /// component; everything later is reported through return values.
    pub fn open(repo_path: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let repo_path = repo_path.into();

        if which::which("git").is_err() {
            return Err(RepoError::GitNotInstalled);
        }

        let runner = SystemGitRunner::new(repo_path.clone());
        Self::with_runner(repo_path, runner)
    }
}

impl<R: GitRunner> GitAgent<R> {
    /// Build an agent with an injected runner. Used by tests to substitute
    /// a scripted double for the real subprocess.
    pub fn with_runner(repo_path: impl Into<PathBuf>, runner: R) -> Result<Self, RepoError> {
        let repo_path = repo_path.into();

        // A .git directory for normal clones, a .git file for worktrees.
        if !repo_path.join(".git").exists() {
            return Err(RepoError::NotARepository(repo_path));
        }

        Ok(Self { repo_path, runner })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Read the current repository status.
    ///
    /// Issues two subcommands per call: branch lookup and porcelain status.
    /// An empty branch name means detached HEAD and maps to `"HEAD"`.
    pub fn status(&self) -> Result<GitStatus, ExecError> {
        let branch_output = self.runner.run(&["branch", "--show-current"])?;
        let branch = branch_output.stdout.trim();
        let current_branch = if branch.is_empty() { "HEAD" } else { branch };

        let status_output = self.runner.run(&["status", "--porcelain"])?;

        Ok(GitStatus::from_porcelain(
            current_branch,
            &status_output.stdout,
        ))
    }

    /// Stage files for commit. `None` stages the whole working tree.
    ///
    /// Expected failures (non-zero exit, launch fault) are logged and
    /// reported as `Ok(false)`; only a timeout propagates.
    pub fn stage_files(&self, files: Option<&[String]>) -> Result<bool, ExecError> {
        let mut args: Vec<&str> = vec!["add"];
        match files {
            None => args.push("."),
            Some(files) => args.extend(files.iter().map(String::as_str)),
        }

        let Some(output) = self.run_lenient(&args)? else {
            return Ok(false);
        };

        if output.success() {
            debug!("Staged files: {:?}", files.unwrap_or(&[]));
            Ok(true)
        } else {
            warn!("Failed to stage files: {}", output.stderr.trim());
            Ok(false)
        }
    }

    /// Commit whatever is currently staged.
    ///
    /// Returns `Ok(false)` without invoking the commit subcommand when a
    /// fresh status read finds nothing staged.
    pub fn commit_staged(&self, message: &str) -> Result<bool, ExecError> {
        let status = match self.status() {
            Ok(status) => status,
            Err(timeout @ ExecError::Timeout(_)) => return Err(timeout),
            Err(ExecError::SpawnFailed(e)) => {
                warn!("Failed to read status before commit: {}", e);
                return Ok(false);
            }
        };

        if status.staged_files.is_empty() {
            warn!("No staged changes to commit");
            return Ok(false);
        }

        let Some(output) = self.run_lenient(&["commit", "-m", message])? else {
            return Ok(false);
        };

        if output.success() {
            debug!("Committed staged changes: {}", message);
            Ok(true)
        } else {
            warn!("Failed to commit changes: {}", output.stderr.trim());
            Ok(false)
        }
    }

    /// Commit with a detailed, structured result.
    ///
    /// Never fails the call: every fault along the way, timeout included,
    /// lands in `error_message` on a `success = false` result. When `files`
    /// is given they are staged first; otherwise whatever is already staged
    /// gets committed.
    pub fn commit_with_details(&self, message: &str, files: Option<&[String]>) -> CommitResult {
        let timestamp = Utc::now();

        if let Some(files) = files {
            match self.stage_files(Some(files)) {
                Ok(true) => {}
                Ok(false) => {
                    return CommitResult::failure(
                        message,
                        timestamp,
                        Vec::new(),
                        "Failed to stage files",
                    );
                }
                Err(e) => {
                    return CommitResult::failure(message, timestamp, Vec::new(), e.to_string());
                }
            }
        }

        let status = match self.status() {
            Ok(status) => status,
            Err(e) => {
                return CommitResult::failure(message, timestamp, Vec::new(), e.to_string());
            }
        };

        let staged_files = status.staged_files;
        if staged_files.is_empty() {
            return CommitResult::failure(
                message,
                timestamp,
                Vec::new(),
                "No staged changes to commit",
            );
        }

        let commit_output = match self.runner.run(&["commit", "-m", message]) {
            Ok(output) => output,
            Err(e) => {
                return CommitResult::failure(message, timestamp, Vec::new(), e.to_string());
            }
        };

        if !commit_output.success() {
            return CommitResult::failure(
                message,
                timestamp,
                staged_files,
                commit_output.stderr.trim(),
            );
        }

        // The commit exists at this point. A failed hash lookup leaves the
        // hash empty but does not retract the success.
        let commit_hash = match self.runner.run(&["rev-parse", "HEAD"]) {
            Ok(output) if output.success() => Some(output.stdout.trim().to_string()),
            Ok(output) => {
                warn!("Failed to read commit hash: {}", output.stderr.trim());
                None
            }
            Err(e) => {
                warn!("Failed to read commit hash: {}", e);
                None
            }
        };

        CommitResult {
            success: true,
            commit_hash,
            message: message.to_string(),
            timestamp,
            files_changed: staged_files,
            error_message: None,
        }
    }

    /// Stage, synthesize a message, and commit in one step.
    ///
    /// With no explicit file list the whole tree is staged up front; a
    /// staging failure short-circuits before the commit step runs.
    pub fn auto_commit_task(
        &self,
        task_description: &str,
        files: Option<&[String]>,
    ) -> CommitResult {
        if files.is_none() {
            match self.stage_files(None) {
                Ok(true) => {}
                Ok(false) => {
                    return CommitResult::failure(
                        "",
                        Utc::now(),
                        Vec::new(),
                        "Failed to stage changes",
                    );
                }
                Err(e) => {
                    return CommitResult::failure("", Utc::now(), Vec::new(), e.to_string());
                }
            }
        }

        let message = synthesize_message(task_description);

        // No redundant re-staging: commit_with_details only stages when
        // files is Some, and that is exactly the path not staged above.
        self.commit_with_details(&message, files)
    }

    /// Run a subcommand, degrading launch faults to `None` and propagating
    /// timeouts. Shared policy of the boolean convenience operations.
    fn run_lenient(&self, args: &[&str]) -> Result<Option<GitOutput>, ExecError> {
        match self.runner.run(args) {
            Ok(output) => Ok(Some(output)),
            Err(timeout @ ExecError::Timeout(_)) => Err(timeout),
            Err(ExecError::SpawnFailed(e)) => {
                warn!("Failed to launch git: {}", e);
                Ok(None)
            }
        }
    }
}

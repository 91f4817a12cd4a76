//! Error types for gitscribe modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors detected when opening a repository.
///
/// These are configuration problems: the agent cannot operate at all, so
/// they surface at construction time and never at call sites.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("No git repository found at {0}")]
    NotARepository(PathBuf),

    #[error("git executable not found. Install git or add it to PATH")]
    GitNotInstalled,
}

/// Errors from running a git subcommand.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("git command timed out after {0} seconds")]
    Timeout(u64),

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),
}

/// Invariant violations in the result value types.
///
/// One variant per invariant so callers can tell exactly which check failed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("commit_hash required for successful commits")]
    MissingCommitHash,

    #[error("error_message required for failed commits")]
    MissingErrorMessage,

    #[error("error_message must only be set on failed commits")]
    UnexpectedErrorMessage,

    #[error("current_branch cannot be empty")]
    EmptyBranch,

    #[error("has_changes does not match the file sets")]
    InconsistentChangeFlag,
}

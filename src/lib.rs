//! gitscribe - an automated commit agent for task-based workflows.
//!
//! # Overview
//!
//! gitscribe inspects a git working tree, stages changes, synthesizes a
//! conventional commit message from a free-text task description, commits,
//! and reports a structured result. All git access goes through the system
//! `git` binary and its script-oriented porcelain output; nothing reads
//! git's on-disk metadata directly.

pub mod commit;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use commit::{CommitResult, CommitType, GitAgent, synthesize_message};
pub use error::{ExecError, ModelError, RepoError};
pub use git::{GitOutput, GitRunner, GitStatus, SystemGitRunner};

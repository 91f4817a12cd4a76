//! Git subprocess plumbing: the runner seam and status parsing.

pub mod runner;
pub mod status;

pub use runner::{GIT_TIMEOUT_SECS, GitOutput, GitRunner, SystemGitRunner};
pub use status::GitStatus;

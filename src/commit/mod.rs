//! Automated commit workflow: agent, message synthesis, and results.

pub mod agent;
pub mod message;
pub mod result;

pub use agent::GitAgent;
pub use message::{CommitType, synthesize_message};
pub use result::CommitResult;

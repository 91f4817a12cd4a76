//! Commit operation results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Outcome of a single commit operation.
///
/// Constructed fresh per operation and handed to the caller for logging or
/// workflow-gating decisions; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResult {
    pub success: bool,
    pub commit_hash: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub files_changed: Vec<String>,
    pub error_message: Option<String>,
}

impl CommitResult {
    /// Build a failure result.
    pub fn failure(
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        files_changed: Vec<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            commit_hash: None,
            message: message.into(),
            timestamp,
            files_changed,
            error_message: Some(error_message.into()),
        }
    }

    /// Check the result's invariants.
    ///
    /// Callers opt into this; the agent itself reports what happened even
    /// when the outcome is degenerate (see `commit_with_details` on hash
    /// retrieval failure).
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.message.is_empty() {
            return Err(ModelError::EmptyMessage);
        }

        if self.success && self.commit_hash.as_deref().unwrap_or("").is_empty() {
            return Err(ModelError::MissingCommitHash);
        }

        if self.success && self.error_message.is_some() {
            return Err(ModelError::UnexpectedErrorMessage);
        }

        if !self.success && self.error_message.is_none() {
            return Err(ModelError::MissingErrorMessage);
        }

        Ok(())
    }
}

//! Repository status snapshots parsed from porcelain output.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A point-in-time snapshot of the working tree.
///
/// Built fresh on every query and handed to the caller; never cached.
/// A path can legitimately appear in more than one of the file lists,
/// e.g. a partially-staged edit is both staged and unstaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitStatus {
    pub has_changes: bool,
    pub staged_files: Vec<String>,
    pub unstaged_files: Vec<String>,
    pub untracked_files: Vec<String>,
    pub current_branch: String,
}

impl GitStatus {
    /// Parse `git status --porcelain` output into a status snapshot.
    ///
    /// Porcelain v1 lines are a two-character code, a space, then the path.
    /// Lines shorter than three bytes are discarded.
    pub fn from_porcelain(current_branch: impl Into<String>, porcelain: &str) -> Self {
        let mut staged_files = Vec::new();
        let mut unstaged_files = Vec::new();
        let mut untracked_files = Vec::new();

        for line in porcelain.lines() {
            let bytes = line.as_bytes();
            if bytes.len() < 3 {
                continue;
            }

            let index_state = bytes[0] as char;
            let worktree_state = bytes[1] as char;
            let path = line.get(3..).unwrap_or_default();

            // Staged changes (first character of the code)
            if matches!(index_state, 'A' | 'M' | 'D' | 'R' | 'C') {
                staged_files.push(path.to_string());
            }

            // Unstaged changes (second character)
            if matches!(worktree_state, 'M' | 'D') {
                unstaged_files.push(path.to_string());
            }

            // Untracked files
            if index_state == '?' && worktree_state == '?' {
                untracked_files.push(path.to_string());
            }
        }

        let has_changes =
            !staged_files.is_empty() || !unstaged_files.is_empty() || !untracked_files.is_empty();

        Self {
            has_changes,
            staged_files,
            unstaged_files,
            untracked_files,
            current_branch: current_branch.into(),
        }
    }

    /// Check the snapshot's invariants.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.current_branch.is_empty() {
            return Err(ModelError::EmptyBranch);
        }

        let any_files = !self.staged_files.is_empty()
            || !self.unstaged_files.is_empty()
            || !self.untracked_files.is_empty();
        if self.has_changes != any_files {
            return Err(ModelError::InconsistentChangeFlag);
        }

        Ok(())
    }
}

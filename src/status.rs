//! Repository status snapshot.
//!
//! The snapshot is computed elsewhere (from `git status --porcelain=v2`,
//! `git stash list` and `git diff --shortstat`) and handed over as-is. The
//! formatter only reads it.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::config::Flag;

/// Status of one repository at one point in time.
///
/// Every field defaults to zero/empty/false, so a snapshot may omit whatever
/// the producer did not compute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    /// Local branch name
    pub local_branch: String,
    /// Upstream branch name (e.g. `origin/main`), empty without an upstream
    pub remote_branch: String,
    /// Commits on the local branch not on the upstream
    pub ahead: u32,
    /// Commits on the upstream not on the local branch
    pub behind: u32,
    pub staged: u32,
    pub modified: u32,
    pub conflicts: u32,
    pub untracked: u32,
    pub stashed: u32,
    /// Whether the working tree is clean, as decided by the producer
    pub is_clean: bool,
    pub insertions: u32,
    pub deletions: u32,
}

impl Status {
    /// Parse a JSON snapshot.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn flag_count(&self, flag: Flag) -> u32 {
        match flag {
            Flag::Staged => self.staged,
            Flag::Conflict => self.conflicts,
            Flag::Modified => self.modified,
            Flag::Stashed => self.stashed,
            Flag::Untracked => self.untracked,
        }
    }

    /// True when the local branch and its upstream point to different commits.
    pub fn is_diverged(&self) -> bool {
        self.ahead != 0 || self.behind != 0
    }
}

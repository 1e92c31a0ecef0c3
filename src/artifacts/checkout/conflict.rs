use crate::errors::GitletError;
use std::collections::BTreeSet;

/// Ways an untracked working file would lose its content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConflictType {
    /// The target commit writes a file over it
    UntrackedOverwritten,
    /// The target commit does not track it, so it would be deleted
    UntrackedRemoved,
}

impl ConflictType {
    pub fn get_conflict_type(tracked_by_target: bool) -> ConflictType {
        if tracked_by_target {
            ConflictType::UntrackedOverwritten
        } else {
            ConflictType::UntrackedRemoved
        }
    }
}

/// The failure reported for a set of endangered paths
pub fn untracked_conflict(paths: &BTreeSet<String>) -> Option<GitletError> {
    paths
        .first()
        .map(|path| GitletError::UntrackedFileWouldBeOverwritten(path.clone()))
}

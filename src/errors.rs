//! Typed failures raised by repository operations
//!
//! Operations return `anyhow::Result`, wrapping one of these kinds when the
//! failure is a domain condition rather than an I/O problem. The `Display`
//! strings are the messages shown to the user.

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("No object with id {0} exists.")]
    ObjectNotFound(String),
    #[error("No commit with that id exists: {0}")]
    AmbiguousOrNotFound(String),
    #[error("File does not exist: {0}")]
    FileNotFound(String),
    #[error("File does not exist in that commit: {0}")]
    FileNotInCommit(String),
    #[error("No reason to remove the file: {0}")]
    NothingToStageOrRemove(String),
    #[error("There is an untracked file in the way; delete it, or add and commit it first: {0}")]
    UntrackedFileWouldBeOverwritten(String),
    #[error("A branch with that name already exists: {0}")]
    BranchAlreadyExists(String),
    #[error("A branch with that name does not exist: {0}")]
    BranchNotFound(String),
    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,
    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,
    #[error("Cannot merge a branch with itself.")]
    CannotMergeCurrentBranch,
    #[error("No changes added to the commit.")]
    NoChangesToCommit,
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,
    #[error("You have uncommitted changes.")]
    UncommittedChangesBlockMerge,
    #[error("No split point between the current and the given branch.")]
    NoSplitPoint,
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,
    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),
    #[error("Incorrect operands.")]
    IncorrectOperands,
    #[error("Encountered a merge conflict.")]
    MergeConflict { paths: BTreeSet<String> },
}

impl GitletError {
    /// Recover the typed kind carried by an `anyhow::Error`, if any.
    pub fn kind_of(error: &anyhow::Error) -> Option<&GitletError> {
        error.downcast_ref::<GitletError>()
    }
}

//! Plumbing shared by the porcelain commands
//!
//! - `write_commit`: Turn the staging area into a commit on the current branch

pub mod write_commit;

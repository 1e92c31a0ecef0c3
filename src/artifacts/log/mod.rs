//! Commit history traversal
//!
//! - `rev_list`: lazy first-parent walk from a commit back to the root
//!
//! History is linear by construction here: merge commits are followed
//! through their first parent only.

pub mod rev_list;

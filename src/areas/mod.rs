//! Core repository components
//!
//! - `database`: Object store for blobs and commits, plus staged blob copies
//! - `index`: Staging area of pending additions and removals
//! - `refs`: Branch table and the current branch
//! - `state`: The persisted record holding the branch table and staging area
//! - `repository`: High-level repository handle tying the areas together
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod state;
pub mod workspace;

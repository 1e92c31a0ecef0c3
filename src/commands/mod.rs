//! Command implementations
//!
//! - `plumbing`: building blocks shared by several commands (recording a commit)
//! - `porcelain`: the operations exposed on the command line

pub mod plumbing;
pub mod porcelain;

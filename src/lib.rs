//! A local version-control engine in the spirit of gitlet
//!
//! Snapshots of a flat working directory are stored as content-addressed
//! blobs and commits under `.gitlet/`, with named branches, a staging area
//! and a three-way merge over first-parent histories.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

//! Working tree status inspection
//!
//! Analyzes the working directory by comparing it against the staging area
//! and the head commit.
//!
//! ## Components
//!
//! - `file_change`: Enum types for categorizing changes
//! - `inspector`: Content comparison of working files
//! - `status_info`: Status classification and aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;

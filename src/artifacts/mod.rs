//! Data types and algorithms built on top of the repository areas
//!
//! - `objects`: Blobs, commits and their identifiers
//! - `branch`: Branch names and revision expressions
//! - `checkout`: Working directory migrations between snapshots
//! - `status`: Working directory classification
//! - `log`: Commit history traversal
//! - `merge`: Split point search and three-way resolution
//! - `core`: Output helpers

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;

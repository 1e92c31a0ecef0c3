//! Merge engine building blocks
//!
//! - `split_finder`: merge base search over first-parent chains
//! - `resolution`: three-way per-path decision table and conflict content

pub mod resolution;
pub mod split_finder;

//! Gitlet object types and operations
//!
//! All persisted content is stored as objects identified by SHA-1 hashes.
//! There are two kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot with metadata (message, timestamp, parent commits, file table)
//!
//! All objects implement serialization/deserialization for the object format:
//! `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest hash prefix accepted as an abbreviated object id
pub const MIN_PREFIX_LENGTH: usize = 4;

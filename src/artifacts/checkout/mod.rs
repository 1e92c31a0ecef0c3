//! Checkout operations and conflict handling
//!
//! Switching the working directory to another snapshot by:
//! - Detecting untracked files that the switch would destroy
//! - Planning and executing file system changes
//!
//! Conflicts are all detected before any change is made to the working
//! directory.

pub mod conflict;
pub mod migration;

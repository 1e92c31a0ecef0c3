//! User-facing repository operations
//!
//! Each file adds one command to `Repository`. A command loads the persisted
//! state, mutates it, and saves it back only when everything succeeded.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;

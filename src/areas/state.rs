//! Persisted repository state
//!
//! The branch table and the staging area are saved together as one JSON
//! record (`.gitlet/repo`). A command loads the record, mutates it in memory
//! and saves it back only once it has succeeded, so a failed command leaves
//! the record untouched.

use crate::areas::database::Database;
use crate::areas::index::StagingArea;
use crate::areas::refs::BranchTable;
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StateRecord {
    #[serde(flatten)]
    refs: BranchTable,
    #[serde(flatten)]
    index: StagingArea,
}

#[derive(Debug)]
pub struct RepositoryState {
    /// Path to the state record (typically `.gitlet/repo`)
    path: Box<Path>,
    record: StateRecord,
}

impl RepositoryState {
    pub fn new(path: Box<Path>) -> Self {
        RepositoryState {
            path,
            record: StateRecord::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn refs(&self) -> &BranchTable {
        &self.record.refs
    }

    pub fn refs_mut(&mut self) -> &mut BranchTable {
        &mut self.record.refs
    }

    pub fn index(&self) -> &StagingArea {
        &self.record.index
    }

    pub fn index_mut(&mut self) -> &mut StagingArea {
        &mut self.record.index
    }

    /// Replace the in-memory state with a fresh branch table and an empty
    /// staging area
    pub fn reset(&mut self, refs: BranchTable) {
        self.record = StateRecord {
            refs,
            index: StagingArea::default(),
        };
    }

    /// Load the state record from disk
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the record while reading it.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path.exists() {
            anyhow::bail!(GitletError::NotInitialized);
        }

        let mut state_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open state record {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut state_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("Unable to read state record {}", self.path.display()))?;

        self.record = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt state record {}", self.path.display()))?;
        debug!(
            head = %self.record.refs.head(),
            staged = self.record.index.staged().len(),
            removed = self.record.index.removed().len(),
            "loaded repository state"
        );

        Ok(())
    }

    /// Save the state record, replacing the previous one atomically
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let state_dir = self
            .path
            .parent()
            .with_context(|| format!("Invalid state record path {}", self.path.display()))?;
        let temp_path = state_dir.join(Database::generate_temp_name());

        let content = serde_json::to_vec_pretty(&self.record)?;

        {
            let mut temp_file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Unable to open {}", temp_path.display()))?;
            let mut lock = file_guard::lock(&mut temp_file, file_guard::Lock::Exclusive, 0, 1)?;
            lock.deref_mut()
                .write_all(&content)
                .with_context(|| format!("Unable to write {}", temp_path.display()))?;
        }

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Unable to replace state record {}", self.path.display()))?;
        debug!(head = %self.record.refs.head(), "saved repository state");

        Ok(())
    }
}

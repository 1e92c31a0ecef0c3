//! Checkout migration and conflict detection
//!
//! Moving the working directory to another commit's snapshot happens in
//! two steps:
//!
//! 1. Check that no untracked working file would be overwritten or deleted
//! 2. Plan the file operations (create, delete, modify), then apply them
//!
//! Everything is checked and planned before the first file is touched, so
//! a refused checkout leaves the working directory as it was.

use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::{ConflictType, untracked_conflict};
use crate::artifacts::objects::commit::{Commit, FileTable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::inspector::Inspector;
use bytes::Bytes;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Type of file system action required for checkout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Modify existing file
    Modify,
}

/// Set of planned actions grouped by type
pub type ActionsSet = HashMap<ActionType, Vec<(String, Option<ObjectId>)>>;

/// Set of detected conflicts grouped by type
pub type ConflictsSet = HashMap<ConflictType, BTreeSet<String>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    inspector: Inspector<'r>,
    actions: ActionsSet,
    conflicts: ConflictsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        let conflicts = HashMap::from([
            (ConflictType::UntrackedOverwritten, BTreeSet::new()),
            (ConflictType::UntrackedRemoved, BTreeSet::new()),
        ]);

        Self {
            repository,
            inspector: Inspector::new(repository),
            actions,
            conflicts,
        }
    }

    pub fn actions(&self) -> &ActionsSet {
        &self.actions
    }

    /// Replace the working directory with the `target` snapshot
    pub fn apply_changes(
        &mut self,
        index: &StagingArea,
        head: &Commit,
        target: &FileTable,
    ) -> anyhow::Result<()> {
        self.check_untracked(index, head, target)?;
        self.plan_changes(target)?;
        self.repository.workspace().apply_migration(self)?;

        Ok(())
    }

    /// Refuse when a working file untracked by `head` and not staged exists
    pub fn check_untracked(
        &mut self,
        index: &StagingArea,
        head: &Commit,
        target: &FileTable,
    ) -> anyhow::Result<()> {
        for path in self.repository.workspace().list_files()? {
            if self.inspector.is_untracked(&path, index, head) {
                let conflict_type = ConflictType::get_conflict_type(target.contains_key(&path));
                self.conflicts.entry(conflict_type).or_default().insert(path);
            }
        }

        let endangered = self
            .conflicts
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>();

        match untracked_conflict(&endangered) {
            Some(error) => {
                debug!(paths = ?endangered, "untracked files in the way");
                Err(error.into())
            }
            None => Ok(()),
        }
    }

    fn plan_changes(&mut self, target: &FileTable) -> anyhow::Result<()> {
        let working_files = self.repository.workspace().list_files()?;
        let paths = working_files
            .iter()
            .chain(target.keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        for path in paths {
            let working_oid = self.inspector.working_oid(&path)?;

            let action = match (working_oid, target.get(&path)) {
                (Some(_), None) => Some((ActionType::Delete, None)),
                (None, Some(oid)) => Some((ActionType::Add, Some(oid.clone()))),
                (Some(working_oid), Some(oid)) if &working_oid != oid => {
                    Some((ActionType::Modify, Some(oid.clone())))
                }
                _ => None,
            };

            if let Some((action_type, oid)) = action {
                self.actions
                    .entry(action_type)
                    .or_default()
                    .push((path, oid));
            }
        }

        debug!(
            added = self.actions[&ActionType::Add].len(),
            modified = self.actions[&ActionType::Modify].len(),
            deleted = self.actions[&ActionType::Delete].len(),
            "planned checkout"
        );

        Ok(())
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let blob = self.repository.load_blob(object_id)?;

        Ok(blob.into_content())
    }
}

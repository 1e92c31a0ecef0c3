//! Branch table
//!
//! Branches are named, mutable pointers to commits. Exactly one of them is
//! the current branch (`head`), the one new commits are recorded on.
//!
//! The table is persisted as part of the repository state record, so every
//! change to it lands on disk together with the staging area.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTable {
    /// Current branch; always a key of `branches` once initialized
    head: BranchName,
    branches: BTreeMap<BranchName, ObjectId>,
}

impl Default for BranchTable {
    fn default() -> Self {
        BranchTable {
            head: BranchName::default_branch(),
            branches: BTreeMap::new(),
        }
    }
}

impl BranchTable {
    /// A table holding only the default branch, pointing at `root`
    pub fn new(root: ObjectId) -> Self {
        let head = BranchName::default_branch();

        BranchTable {
            branches: BTreeMap::from([(head.clone(), root)]),
            head,
        }
    }

    pub fn head(&self) -> &BranchName {
        &self.head
    }

    /// Tip of the current branch
    pub fn head_oid(&self) -> anyhow::Result<&ObjectId> {
        self.branches
            .get(&self.head)
            .with_context(|| format!("current branch {} has no commit", self.head))
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.head.as_ref() == name
    }

    pub fn read_branch(&self, name: &str) -> Option<&ObjectId> {
        self.branches
            .iter()
            .find(|(branch_name, _)| branch_name.as_ref() == name)
            .map(|(_, oid)| oid)
    }

    /// Tip of the named branch, failing with `BranchNotFound`
    pub fn branch_oid(&self, name: &str) -> anyhow::Result<&ObjectId> {
        self.read_branch(name)
            .ok_or_else(|| GitletError::BranchNotFound(name.to_string()).into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read_branch(name).is_some()
    }

    pub fn list_branches(&self) -> impl Iterator<Item = &BranchName> {
        self.branches.keys()
    }

    pub fn create_branch(&mut self, name: BranchName, source_oid: ObjectId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            anyhow::bail!(GitletError::BranchAlreadyExists(name.to_string()));
        }

        self.branches.insert(name, source_oid);

        Ok(())
    }

    pub fn delete_branch(&mut self, name: &str) -> anyhow::Result<ObjectId> {
        if !self.contains(name) {
            anyhow::bail!(GitletError::BranchNotFound(name.to_string()));
        }
        if self.is_current_branch(name) {
            anyhow::bail!(GitletError::CannotRemoveCurrentBranch);
        }

        let branch_name = BranchName::try_parse(name.to_string())?;
        self.branches
            .remove(&branch_name)
            .with_context(|| format!("branch {name} vanished while deleting it"))
    }

    /// Make the named branch current
    pub fn set_head(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.contains(name) {
            anyhow::bail!(GitletError::BranchNotFound(name.to_string()));
        }

        self.head = BranchName::try_parse(name.to_string())?;

        Ok(())
    }

    /// Repoint the current branch
    pub fn update_head(&mut self, oid: ObjectId) {
        self.branches.insert(self.head.clone(), oid);
    }
}

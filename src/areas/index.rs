//! Staging area
//!
//! Pending intentions for the next commit:
//!
//! - `staged`: paths mapped to the blob that will be recorded for them
//! - `removed`: tracked paths that the next commit will stop tracking
//!
//! A path is never in both sets at once; every mutation here moves it out
//! of the other set first.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingArea {
    staged: BTreeMap<String, ObjectId>,
    removed: BTreeSet<String>,
}

impl StagingArea {
    pub fn staged(&self) -> &BTreeMap<String, ObjectId> {
        &self.staged
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn staged_oid(&self, path: &str) -> Option<&ObjectId> {
        self.staged.get(path)
    }

    pub fn is_staged(&self, path: &str) -> bool {
        self.staged.contains_key(path)
    }

    pub fn is_removed(&self, path: &str) -> bool {
        self.removed.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    pub fn add(&mut self, path: String, oid: ObjectId) {
        self.removed.remove(&path);
        self.staged.insert(path, oid);
    }

    pub fn remove(&mut self, path: String) {
        self.staged.remove(&path);
        self.removed.insert(path);
    }

    /// Drop a staged addition; returns whether there was one
    pub fn unstage(&mut self, path: &str) -> bool {
        self.staged.remove(path).is_some()
    }

    /// Forget any pending intention for `path`
    pub fn discard(&mut self, path: &str) {
        self.staged.remove(path);
        self.removed.remove(path);
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
    }
}

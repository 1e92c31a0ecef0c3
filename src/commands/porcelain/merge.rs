use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::resolution::{MergeAction, conflict_content, resolve_all};
use crate::artifacts::merge::split_finder::SplitFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use bytes::Bytes;
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The current branch now points at the given branch's tip
    FastForward,
    /// The given branch had nothing the current branch lacked
    AlreadyAncestor,
    /// A two-parent commit was recorded
    Merged {
        commit: ObjectId,
        conflicts: BTreeSet<String>,
    },
}

impl MergeOutcome {
    /// The notice to surface when the merge commit carries conflict markers
    pub fn conflict_notice(&self) -> Option<GitletError> {
        match self {
            MergeOutcome::Merged { conflicts, .. } if !conflicts.is_empty() => {
                Some(GitletError::MergeConflict {
                    paths: conflicts.clone(),
                })
            }
            _ => None,
        }
    }
}

/// A resolved merge step, with every blob it needs already loaded
enum PlannedWrite {
    Take { path: String, blob: Blob },
    Remove { path: String },
    Conflict { path: String, blob: Blob },
}

impl Repository {
    pub async fn merge(&mut self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let given_oid = state.refs().branch_oid(branch_name)?.clone();
        if state.refs().is_current_branch(branch_name) {
            anyhow::bail!(GitletError::CannotMergeCurrentBranch);
        }

        let head_commit = self.head_commit(&state)?;
        let given_commit = self.load_commit(&given_oid)?;

        Migration::new(self).check_untracked(
            state.index(),
            &head_commit,
            given_commit.files(),
        )?;
        if !state.index().is_empty() {
            anyhow::bail!(GitletError::UncommittedChangesBlockMerge);
        }

        let split_finder =
            SplitFinder::new(|oid: &ObjectId| Ok(self.load_commit(oid)?.parent().cloned()));
        let split_oid = split_finder
            .find_split_point(head_commit.oid(), &given_oid)?
            .ok_or(GitletError::NoSplitPoint)?;
        debug!(split = %split_oid, head = %head_commit.oid(), given = %given_oid, "found split point");

        if split_oid == given_oid {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(MergeOutcome::AlreadyAncestor);
        }

        if &split_oid == head_commit.oid() {
            self.fast_forward(&mut state, &head_commit, &given_commit)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForward);
        }

        let split_commit = self.load_commit(&split_oid)?;
        let plan = self.plan_merge(&split_commit, &head_commit, &given_commit)?;
        let conflicts = self.apply_merge_plan(&mut state, plan)?;

        let head_name = state.refs().head().clone();
        let message = format!("Merged {branch_name} into {head_name}.");
        let commit = self.write_commit(
            &mut state,
            vec![head_commit.oid().clone(), given_oid],
            message.clone(),
        )?;
        state.write_updates()?;

        info!(oid = %commit.oid(), conflicts = conflicts.len(), "recorded merge commit");
        writeln!(self.writer(), "{message}")?;

        Ok(MergeOutcome::Merged {
            commit: commit.oid().clone(),
            conflicts,
        })
    }

    fn fast_forward(
        &self,
        state: &mut RepositoryState,
        head_commit: &Commit,
        given_commit: &Commit,
    ) -> anyhow::Result<()> {
        let mut migration = Migration::new(self);
        migration.apply_changes(state.index(), head_commit, given_commit.files())?;

        state.index_mut().clear();
        self.database().clear_stage()?;
        state.refs_mut().update_head(given_commit.oid().clone());
        state.write_updates()?;

        info!(branch = %state.refs().head(), oid = %given_commit.oid(), "fast-forwarded");

        Ok(())
    }

    fn plan_merge(
        &self,
        split: &Commit,
        head: &Commit,
        given: &Commit,
    ) -> anyhow::Result<Vec<PlannedWrite>> {
        let mut plan = Vec::new();

        for (path, action) in resolve_all(split.files(), head.files(), given.files()) {
            debug!(path = %path, ?action, "merge decision");

            let step = match action {
                MergeAction::TakeGiven(oid) => PlannedWrite::Take {
                    blob: self.load_blob(&oid)?,
                    path,
                },
                MergeAction::Remove => PlannedWrite::Remove { path },
                MergeAction::Conflict { current, given } => {
                    let current = self.blob_content_or_empty(current.as_ref())?;
                    let given = self.blob_content_or_empty(given.as_ref())?;

                    PlannedWrite::Conflict {
                        blob: Blob::new(conflict_content(&current, &given)),
                        path,
                    }
                }
            };
            plan.push(step);
        }

        Ok(plan)
    }

    fn blob_content_or_empty(&self, oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match oid {
            Some(oid) => Ok(self.load_blob(oid)?.into_content()),
            None => Ok(Bytes::new()),
        }
    }

    /// Write and stage every planned step, returning the conflicted paths
    fn apply_merge_plan(
        &self,
        state: &mut RepositoryState,
        plan: Vec<PlannedWrite>,
    ) -> anyhow::Result<BTreeSet<String>> {
        let mut conflicts = BTreeSet::new();

        for step in plan {
            match step {
                PlannedWrite::Take { path, blob } => {
                    self.workspace().write_file(&path, blob.content())?;
                    let oid = self.database().store_staged(&blob)?;
                    state.index_mut().add(path, oid);
                }
                PlannedWrite::Remove { path } => {
                    self.workspace().remove_file(&path)?;
                    state.index_mut().remove(path);
                }
                PlannedWrite::Conflict { path, blob } => {
                    self.workspace().write_file(&path, blob.content())?;
                    self.database().store(&blob)?;
                    let oid = self.database().store_staged(&blob)?;
                    state.index_mut().add(path.clone(), oid);
                    conflicts.insert(path);
                }
            }
        }

        Ok(conflicts)
    }
}

use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use tracing::info;

impl Repository {
    /// Record the staged snapshot as a new commit on the current branch
    ///
    /// The snapshot is the head commit's files, overlaid with the staged
    /// additions, minus the staged removals. The staging area is consumed.
    pub fn write_commit(
        &self,
        state: &mut RepositoryState,
        parents: Vec<ObjectId>,
        message: String,
    ) -> anyhow::Result<Commit> {
        let head_commit = self.head_commit(state)?;

        let mut files = head_commit.files().clone();
        for (path, blob_oid) in state.index().staged() {
            files.insert(path.clone(), blob_oid.clone());
        }
        for path in state.index().removed() {
            files.remove(path);
        }

        let commit = Commit::new(parents, Commit::timestamp_from_env(), files, message);
        self.database().store(&commit)?;

        state.refs_mut().update_head(commit.oid().clone());
        state.index_mut().clear();
        self.database().clear_stage()?;

        info!(
            oid = %commit.oid(),
            branch = %state.refs().head(),
            files = commit.files().len(),
            "recorded commit"
        );

        Ok(commit)
    }
}

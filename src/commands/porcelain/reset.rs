use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use tracing::info;

impl Repository {
    /// Move the current branch to `revision` and check out its snapshot
    pub async fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let target_oid = Revision::try_parse(revision)?.resolve(self, state.refs())?;
        let target_commit = self.load_commit(&target_oid)?;
        let head_commit = self.head_commit(&state)?;

        let mut migration = Migration::new(self);
        migration.apply_changes(state.index(), &head_commit, target_commit.files())?;

        state.index_mut().clear();
        self.database().clear_stage()?;
        state.refs_mut().update_head(target_oid.clone());
        state.write_updates()?;

        info!(branch = %state.refs().head(), oid = %target_oid, "reset branch");

        Ok(())
    }
}

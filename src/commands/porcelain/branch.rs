use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use tracing::debug;

impl Repository {
    /// Create a branch pointing at the current head commit
    pub async fn branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse_new(branch_name.to_string())?;

        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let source_oid = state.refs().head_oid()?.clone();
        debug!(branch = %branch_name, oid = %source_oid, "creating branch");
        state.refs_mut().create_branch(branch_name, source_oid)?;

        state.write_updates()?;

        Ok(())
    }

    /// Delete a branch pointer; its commits stay in the store
    pub async fn rm_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let oid = state.refs_mut().delete_branch(branch_name)?;
        debug!(branch = branch_name, oid = %oid, "deleted branch");

        state.write_updates()?;

        Ok(())
    }
}

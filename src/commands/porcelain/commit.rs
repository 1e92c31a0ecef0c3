use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            anyhow::bail!(GitletError::EmptyCommitMessage);
        }

        let state = self.state();
        let mut state = state.lock().await;

        // Load the repository state from the disk
        state.rehydrate()?;

        if state.index().is_empty() {
            anyhow::bail!(GitletError::NoChangesToCommit);
        }

        let parent = state.refs().head_oid()?.clone();
        let commit = self.write_commit(&mut state, vec![parent], message.to_string())?;
        state.write_updates()?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            state.refs().head(),
            commit.oid().to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit.oid().clone())
    }
}

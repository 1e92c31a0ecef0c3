use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use tracing::debug;

impl Repository {
    pub async fn add(&mut self, path: &str) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;

        // Load the repository state from the disk
        state.rehydrate()?;

        let blob = self.workspace().parse_blob(path)?;
        let blob_id = blob.object_id()?;
        let head_commit = self.head_commit(&state)?;

        if head_commit.file(path) == Some(&blob_id) {
            // back to the committed version: nothing left to record
            state.index_mut().discard(path);
            debug!(path, "content matches head commit");
        } else {
            self.database().store(&blob)?;
            self.database().store_staged(&blob)?;
            state.index_mut().add(path.to_string(), blob_id);
            debug!(path, "staged");
        }

        state.write_updates()?;

        Ok(())
    }
}

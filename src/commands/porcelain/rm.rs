use crate::areas::repository::Repository;
use crate::errors::GitletError;

impl Repository {
    pub async fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;

        state.rehydrate()?;

        let head_commit = self.head_commit(&state)?;
        let tracked = head_commit.tracks(path);

        if !state.index().is_staged(path) && !tracked {
            anyhow::bail!(GitletError::NothingToStageOrRemove(path.to_string()));
        }

        state.index_mut().unstage(path);
        if tracked {
            state.index_mut().remove(path.to_string());
            self.workspace().remove_file(path)?;
        }

        state.write_updates()?;

        Ok(())
    }
}

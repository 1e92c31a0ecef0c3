use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;

impl Repository {
    /// Ids of the commits whose message is exactly `message`
    pub async fn find(&mut self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let mut matches = Vec::new();
        for commit_oid in self.database().list_objects(ObjectType::Commit)? {
            if self.load_commit(&commit_oid)?.message() == message {
                matches.push(commit_oid);
            }
        }

        if matches.is_empty() {
            anyhow::bail!(GitletError::NoCommitWithMessage);
        }

        for commit_oid in &matches {
            writeln!(self.writer(), "{commit_oid}")?;
        }

        Ok(matches)
    }
}

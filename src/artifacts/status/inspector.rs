use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;

/// Compares working files against what the repository expects them to hold
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Hash of the working file's content, if the file exists
    pub fn working_oid(&self, path: &str) -> anyhow::Result<Option<ObjectId>> {
        if !self.repository.workspace().exists(path) {
            return Ok(None);
        }

        let blob = self.repository.workspace().parse_blob(path)?;
        Ok(Some(blob.object_id()?))
    }

    /// A working file that is not staged and is either unknown to the head
    /// commit or marked for removal
    pub fn is_untracked(&self, path: &str, index: &StagingArea, head: &Commit) -> bool {
        !index.is_staged(path) && (!head.tracks(path) || index.is_removed(path))
    }

    pub fn check_workspace_against(
        &self,
        path: &str,
        expected: Option<&ObjectId>,
    ) -> anyhow::Result<WorkspaceChangeType> {
        let working_oid = self.working_oid(path)?;

        Ok(match (expected, working_oid) {
            (None, Some(_)) => WorkspaceChangeType::Untracked,
            (Some(_), None) => WorkspaceChangeType::Deleted,
            (Some(expected), Some(actual)) if expected != &actual => WorkspaceChangeType::Modified,
            _ => WorkspaceChangeType::None,
        })
    }
}

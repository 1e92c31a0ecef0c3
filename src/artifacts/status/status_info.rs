use crate::areas::repository::Repository;
use crate::areas::state::RepositoryState;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::file_change::{FileChange, FileChangeType, WorkspaceChangeType};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type FileSet = BTreeSet<String>;
pub type ChangeSet = BTreeMap<String, WorkspaceChangeType>;

/// Classification of every working, staged and tracked path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) head: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged: FileSet,
    pub(crate) removed: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked: FileSet,
}

impl StatusInfo {
    pub fn file_changes(&self) -> impl Iterator<Item = FileChange> + '_ {
        let staged = self.staged.iter().map(|path| (path, FileChangeType::Staged));
        let removed = self.removed.iter().map(|path| (path, FileChangeType::Removed));
        let workspace = self
            .workspace_changeset
            .iter()
            .map(|(path, change)| (path, FileChangeType::Workspace(change.clone())));
        let untracked = self.untracked.iter().map(|path| (path, FileChangeType::Untracked));

        staged
            .chain(removed)
            .chain(workspace)
            .chain(untracked)
            .map(|(path, change)| FileChange {
                path: path.clone(),
                change,
            })
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Recompute the classification from the files currently on disk
    pub fn initialize(&self, state: &RepositoryState) -> anyhow::Result<StatusInfo> {
        let index = state.index();
        let head_commit = self.repository.head_commit(state)?;
        let inspector = Inspector::new(self.repository);

        let working_files = self.repository.workspace().list_files()?;
        let paths = working_files
            .iter()
            .chain(index.staged().keys())
            .chain(head_commit.files().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut workspace_changeset = ChangeSet::new();
        let mut untracked = FileSet::new();

        for path in paths {
            let change = self.check_path(&path, state, &head_commit, &inspector)?;

            if change.is_unstaged_modification() {
                workspace_changeset.insert(path.clone(), change);
            }

            let on_disk = self.repository.workspace().exists(&path);
            if on_disk && inspector.is_untracked(&path, index, &head_commit) {
                untracked.insert(path);
            }
        }

        Ok(StatusInfo {
            head: state.refs().head().clone(),
            branches: state.refs().list_branches().cloned().collect(),
            staged: index.staged().keys().cloned().collect(),
            removed: index.removed().clone(),
            workspace_changeset,
            untracked,
        })
    }

    fn check_path(
        &self,
        path: &str,
        state: &RepositoryState,
        head_commit: &Commit,
        inspector: &Inspector<'_>,
    ) -> anyhow::Result<WorkspaceChangeType> {
        let index = state.index();

        if let Some(staged_oid) = index.staged_oid(path) {
            return inspector.check_workspace_against(path, Some(staged_oid));
        }

        match head_commit.file(path) {
            Some(head_oid) if !index.is_removed(path) => {
                inspector.check_workspace_against(path, Some(head_oid))
            }
            _ => Ok(WorkspaceChangeType::None),
        }
    }
}

use colored::Colorize;

/// How a working file differs from the version the repository expects
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WorkspaceChangeType {
    #[default]
    None,
    Untracked,
    Modified,
    Deleted,
}

impl WorkspaceChangeType {
    /// Whether the change belongs under "not staged for commit"
    pub fn is_unstaged_modification(&self) -> bool {
        matches!(
            self,
            WorkspaceChangeType::Modified | WorkspaceChangeType::Deleted
        )
    }
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::None => "",
            WorkspaceChangeType::Untracked => "",
            WorkspaceChangeType::Modified => "(modified)",
            WorkspaceChangeType::Deleted => "(deleted)",
        }
    }
}

/// A path listed in a status section
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChangeType {
    Staged,
    Removed,
    Workspace(WorkspaceChangeType),
    Untracked,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileChange {
    pub(crate) path: String,
    pub(crate) change: FileChangeType,
}

impl From<&FileChange> for String {
    fn from(file_change: &FileChange) -> Self {
        match &file_change.change {
            FileChangeType::Workspace(change) => {
                let label: &str = change.into();
                format!("{} {}", file_change.path, label)
            }
            _ => file_change.path.clone(),
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let change_str: String = self.into();
        let colored_str = match self.change {
            FileChangeType::Staged => change_str.green(),
            FileChangeType::Removed => change_str.green(),
            FileChangeType::Workspace(_) => change_str.red(),
            FileChangeType::Untracked => change_str.red(),
        };
        write!(f, "{}", colored_str)
    }
}

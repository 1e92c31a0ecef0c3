use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::errors::GitletError;
use tracing::debug;

/// What a checkout invocation restores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// Switch the working directory and head to a branch
    Branch(String),
    /// Restore one file from the head commit
    File(String),
    /// Restore one file from the named commit
    CommitFile { revision: String, path: String },
}

impl CheckoutTarget {
    /// Build the target from `checkout [<target>] [-- <path>]`
    pub fn from_operands(target: Option<String>, path: Option<String>) -> anyhow::Result<Self> {
        match (target, path) {
            (Some(branch), None) => Ok(CheckoutTarget::Branch(branch)),
            (None, Some(path)) => Ok(CheckoutTarget::File(path)),
            (Some(revision), Some(path)) => Ok(CheckoutTarget::CommitFile { revision, path }),
            (None, None) => Err(GitletError::IncorrectOperands.into()),
        }
    }
}

impl Repository {
    pub async fn checkout(&mut self, target: CheckoutTarget) -> anyhow::Result<()> {
        match target {
            CheckoutTarget::Branch(branch_name) => self.checkout_branch(&branch_name).await,
            CheckoutTarget::File(path) => {
                let state = self.state();
                let mut state = state.lock().await;
                state.rehydrate()?;

                let head_commit = self.head_commit(&state)?;
                self.restore_file(&head_commit, &path)
            }
            CheckoutTarget::CommitFile { revision, path } => {
                let state = self.state();
                let mut state = state.lock().await;
                state.rehydrate()?;

                let commit_oid = Revision::try_parse(&revision)?.resolve(self, state.refs())?;
                let commit = self.load_commit(&commit_oid)?;
                self.restore_file(&commit, &path)
            }
        }
    }

    async fn checkout_branch(&mut self, branch_name: &str) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let target_oid = state.refs().branch_oid(branch_name)?.clone();
        if state.refs().is_current_branch(branch_name) {
            anyhow::bail!(GitletError::AlreadyOnBranch);
        }

        let head_commit = self.head_commit(&state)?;
        let target_commit = self.load_commit(&target_oid)?;

        let mut migration = Migration::new(self);
        migration.apply_changes(state.index(), &head_commit, target_commit.files())?;

        state.index_mut().clear();
        self.database().clear_stage()?;
        state.refs_mut().set_head(branch_name)?;
        state.write_updates()?;

        debug!(branch = branch_name, oid = %target_oid, "switched branch");
        eprintln!("Switched to branch '{branch_name}'");

        Ok(())
    }

    /// Overwrite one working file with its version in `commit`
    ///
    /// Neither the staging area nor the refs change.
    fn restore_file(&self, commit: &Commit, path: &str) -> anyhow::Result<()> {
        let blob_oid = commit
            .file(path)
            .ok_or_else(|| GitletError::FileNotInCommit(path.to_string()))?;
        let blob = self.load_blob(blob_oid)?;

        self.workspace().write_file(path, blob.content())
    }
}

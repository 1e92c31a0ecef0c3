use crate::areas::refs::BranchTable;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use std::fs;

impl Repository {
    pub async fn init(&mut self) -> anyhow::Result<()> {
        if self.gitlet_path().exists() {
            anyhow::bail!(GitletError::AlreadyInitialized);
        }

        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            fs::create_dir_all(self.database().type_path(object_type)).with_context(|| {
                format!("Failed to create .gitlet/objects/{}", object_type.dir_name())
            })?;
        }
        fs::create_dir_all(self.database().stage_path())
            .context("Failed to create .gitlet/stage directory")?;

        let root_oid = self.database().store(&Commit::root())?;

        let state = self.state();
        let mut state = state.lock().await;
        state.reset(BranchTable::new(root_oid));
        state
            .write_updates()
            .context("Failed to create the repository state record")?;

        writeln!(
            self.writer(),
            "Initialized empty Gitlet repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}

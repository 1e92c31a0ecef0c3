use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use colored::Colorize;

const COMMIT_SEPARATOR: &str = "===";

impl Repository {
    /// Show the current branch's history, following first parents
    pub async fn log(&mut self) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let head_oid = state.refs().head_oid()?.clone();

        for commit in RevList::new(self, head_oid) {
            self.display_commit(&commit?)?;
        }

        Ok(())
    }

    /// Show every commit ever recorded, in no particular order
    pub async fn global_log(&mut self) -> anyhow::Result<()> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        for commit_oid in self.database().list_objects(ObjectType::Commit)? {
            let commit = self.load_commit(&commit_oid)?;
            self.display_commit(&commit)?;
        }

        Ok(())
    }

    pub fn display_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{COMMIT_SEPARATOR}")?;
        writeln!(writer, "{}", format!("commit {}", commit.oid()).yellow())?;
        if let [first, second, ..] = commit.parents() {
            writeln!(
                writer,
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{FileChange, FileChangeType};
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;

const SECTIONS: [&str; 4] = [
    "Staged Files",
    "Removed Files",
    "Modifications Not Staged For Commit",
    "Untracked Files",
];

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<StatusInfo> {
        let state = self.state();
        let mut state = state.lock().await;
        state.rehydrate()?;

        let status_info = self.working_status().initialize(&state)?;
        self.print_status(&status_info)?;

        Ok(status_info)
    }

    fn print_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch_name in &status_info.branches {
            if *branch_name == status_info.head {
                writeln!(writer, "{}", format!("*{branch_name}").green())?;
            } else {
                writeln!(writer, "{branch_name}")?;
            }
        }
        writeln!(writer)?;

        let changes = status_info.file_changes().collect::<Vec<_>>();
        for (section, section_name) in SECTIONS.iter().enumerate() {
            writeln!(writer, "=== {section_name} ===")?;
            for change in changes.iter().filter(|change| section_of(change) == section) {
                writeln!(writer, "{change}")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

fn section_of(change: &FileChange) -> usize {
    match change.change {
        FileChangeType::Staged => 0,
        FileChangeType::Removed => 1,
        FileChangeType::Workspace(_) => 2,
        FileChangeType::Untracked => 3,
    }
}

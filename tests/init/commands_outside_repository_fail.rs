use crate::common::command::{repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["add", "a.txt"])]
#[case(&["commit", "message"])]
#[case(&["branch", "dev"])]
#[case(&["merge", "dev"])]
fn commands_outside_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_gitlet_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Not in an initialized Gitlet directory.",
        ));

    assert!(!repository_dir.path().join(".gitlet").exists());
}

use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A Gitlet version-control system already exists in the current directory.",
        ));

    // the existing history is untouched
    run_gitlet_command(init_repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial files"));
}

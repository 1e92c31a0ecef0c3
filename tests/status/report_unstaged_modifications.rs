use crate::common::command::{gitlet_add, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, delete_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_deleted_tracked_file(init_repository_dir: TempDir) {
    delete_file(&init_repository_dir.path().join("a.txt"));

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\na.txt (deleted)\n\n",
        ));
}

#[rstest]
fn report_staged_file_changed_again(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("c.txt"), "three".to_string()));
    gitlet_add(dir, "c.txt").assert().success();
    write_file(FileSpec::new(dir.join("c.txt"), "three, edited".to_string()));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nc.txt\n\n"))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nc.txt (modified)\n\n",
        ));
}

#[rstest]
fn report_staged_file_deleted_from_disk(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("c.txt"), "three".to_string()));
    gitlet_add(dir, "c.txt").assert().success();
    delete_file(&dir.join("c.txt"));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\nc.txt (deleted)\n\n",
        ));
}

#[rstest]
fn unchanged_tracked_files_are_not_reported(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        ));
}

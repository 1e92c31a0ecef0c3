use crate::common::command::{gitlet_add, init_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_missing_file_fails(init_repository_dir: TempDir) {
    gitlet_add(init_repository_dir.path(), "missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist: missing.txt"));
}

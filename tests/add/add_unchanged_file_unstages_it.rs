use crate::common::command::{gitlet_add, gitlet_commit, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_unchanged_file_unstages_it(init_repository_dir: TempDir) {
    let a_txt = init_repository_dir.path().join("a.txt");

    write_file(FileSpec::new(a_txt.clone(), "changed".to_string()));
    gitlet_add(init_repository_dir.path(), "a.txt")
        .assert()
        .success();

    // back to the committed content
    write_file(FileSpec::new(a_txt, "one".to_string()));
    gitlet_add(init_repository_dir.path(), "a.txt")
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));

    gitlet_commit(init_repository_dir.path(), "Nothing new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}

use crate::common::command::{init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_untracked_file_fails(init_repository_dir: TempDir) {
    let c_txt = init_repository_dir.path().join("c.txt");
    write_file(FileSpec::new(c_txt.clone(), "three".to_string()));
    let repo_record = init_repository_dir.path().join(".gitlet").join("repo");
    let before = std::fs::read(&repo_record).unwrap();

    run_gitlet_command(init_repository_dir.path(), &["rm", "c.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No reason to remove the file: c.txt"));

    assert_eq!(read_file(&c_txt), "three");
    assert_eq!(std::fs::read(&repo_record).unwrap(), before);
}

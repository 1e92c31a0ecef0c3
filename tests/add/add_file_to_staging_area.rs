use crate::common::command::{gitlet_add, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_new_file_to_staging_area(init_repository_dir: TempDir) {
    write_file(FileSpec::new(
        init_repository_dir.path().join("c.txt"),
        "three".to_string(),
    ));

    gitlet_add(init_repository_dir.path(), "c.txt")
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nc.txt\n\n"));

    let staged_copies = std::fs::read_dir(init_repository_dir.path().join(".gitlet").join("stage"))
        .expect("Failed to read stage directory")
        .count();
    assert_eq!(staged_copies, 1);
}

#[rstest]
fn add_many_files_incrementally(init_repository_dir: TempDir) {
    let files = write_generated_files(init_repository_dir.path(), 5);

    for file in &files {
        let name = file.path.file_name().unwrap().to_string_lossy().to_string();
        gitlet_add(init_repository_dir.path(), &name)
            .assert()
            .success();
    }

    let mut names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    let expected = format!("=== Staged Files ===\n{}\n\n", names.join("\n"));

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[rstest]
fn add_restores_a_removed_file(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        init_repository_dir.path().join("a.txt"),
        "one".to_string(),
    ));

    gitlet_add(init_repository_dir.path(), "a.txt")
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));
}

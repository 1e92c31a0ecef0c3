use crate::common::command::{
    gitlet_add, gitlet_commit, head_commit_id, init_repository_dir, log_commit_ids,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_prints_branch_and_short_id(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("c.txt"),
        "three".to_string(),
    ));
    gitlet_add(init_repository_dir.path(), "c.txt")
        .assert()
        .success();

    gitlet_commit(init_repository_dir.path(), "Add c\nwith a longer body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master [0-9a-f]{7}\] Add c\n$")?);

    let head = head_commit_id(init_repository_dir.path());
    assert_eq!(head.len(), 40);
    assert_eq!(log_commit_ids(init_repository_dir.path()).len(), 3);

    Ok(())
}

#[rstest]
fn commit_clears_the_staging_area(init_repository_dir: TempDir) {
    write_file(FileSpec::new(
        init_repository_dir.path().join("a.txt"),
        "changed".to_string(),
    ));
    gitlet_add(init_repository_dir.path(), "a.txt")
        .assert()
        .success();
    gitlet_commit(init_repository_dir.path(), "Change a")
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));

    let staged_copies = std::fs::read_dir(init_repository_dir.path().join(".gitlet").join("stage"))
        .expect("Failed to read stage directory")
        .count();
    assert_eq!(staged_copies, 0);
}

#[rstest]
fn commit_keeps_earlier_snapshots_intact(init_repository_dir: TempDir) {
    let first = head_commit_id(init_repository_dir.path());

    run_gitlet_command(init_repository_dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    gitlet_commit(init_repository_dir.path(), "Remove a")
        .assert()
        .success();
    assert!(!init_repository_dir.path().join("a.txt").exists());

    run_gitlet_command(init_repository_dir.path(), &["checkout", first.as_str(), "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&init_repository_dir.path().join("a.txt")), "one");
}

use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_with_itself_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["merge", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot merge a branch with itself."));
}

#[rstest]
fn merge_with_missing_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["merge", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist: nope",
        ));
}

#[rstest]
fn merge_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    commit_file(dir, "c.txt", "three", "Dev work");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    let tip = head_commit_id(dir);

    write_file(FileSpec::new(dir.join("a.txt"), "staged edit".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You have uncommitted changes."));

    assert_eq!(head_commit_id(dir), tip);
    assert!(!dir.join("c.txt").exists());
}

#[rstest]
fn merge_with_untracked_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    commit_file(dir, "c.txt", "three on dev", "Dev work");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    commit_file(dir, "d.txt", "four", "Master work");

    write_file(FileSpec::new(dir.join("c.txt"), "precious".to_string()));

    run_gitlet_command(dir, &["merge", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first: c.txt",
        ));

    assert_eq!(
        std::fs::read_to_string(dir.join("c.txt")).unwrap(),
        "precious"
    );
}

#[rstest]
fn untracked_file_is_reported_before_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    commit_file(dir, "c.txt", "three on dev", "Dev work");
    run_gitlet_command(dir, &["checkout", "master"]).assert().success();
    commit_file(dir, "d.txt", "four", "Master work");

    write_file(FileSpec::new(dir.join("c.txt"), "precious".to_string()));
    write_file(FileSpec::new(dir.join("a.txt"), "staged edit".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();

    run_gitlet_command(dir, &["merge", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first: c.txt",
        ))
        .stderr(predicate::str::contains("You have uncommitted changes.").not());

    assert_eq!(
        std::fs::read_to_string(dir.join("c.txt")).unwrap(),
        "precious"
    );
}

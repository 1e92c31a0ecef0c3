use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, log_commit_ids, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_branch_and_working_directory(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    commit_file(dir, "a.txt", "one, revised", "Revise a");
    commit_file(dir, "c.txt", "three", "Add c");

    run_gitlet_command(dir, &["reset", first.as_str()]).assert().success();

    assert_eq!(head_commit_id(dir), first);
    assert_eq!(log_commit_ids(dir).len(), 2);
    assert_eq!(read_file(&dir.join("a.txt")), "one");
    assert!(!dir.join("c.txt").exists());
}

#[rstest]
fn reset_then_checkout_of_other_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();
    commit_file(dir, "c.txt", "three", "Add c");
    let tip = head_commit_id(dir);

    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    run_gitlet_command(dir, &["reset", tip.as_str()]).assert().success();

    // dev now carries master's tip
    assert_eq!(read_file(&dir.join("c.txt")), "three");
    run_gitlet_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert_eq!(head_commit_id(dir), tip);

    run_gitlet_command(dir, &["reset", first.as_str()]).assert().success();
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();
    assert_eq!(head_commit_id(dir), tip);
}

#[rstest]
fn reset_discards_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    write_file(FileSpec::new(dir.join("a.txt"), "staged edit".to_string()));
    run_gitlet_command(dir, &["add", "a.txt"]).assert().success();

    run_gitlet_command(dir, &["reset", first.as_str()]).assert().success();

    assert_eq!(read_file(&dir.join("a.txt")), "one");
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn reset_with_untracked_file_in_the_way_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    commit_file(dir, "c.txt", "three", "Add c");
    run_gitlet_command(dir, &["rm", "c.txt"]).assert().success();
    run_gitlet_command(dir, &["commit", "Drop c"]).assert().success();
    write_file(FileSpec::new(dir.join("c.txt"), "precious".to_string()));
    let tip = head_commit_id(dir);

    run_gitlet_command(dir, &["reset", first.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(head_commit_id(dir), tip);
    assert_eq!(read_file(&dir.join("c.txt")), "precious");
}

#[rstest]
fn reset_to_unknown_commit_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["reset", "0123456789"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No commit with that id exists: 0123456789",
        ));
}

#[rstest]
fn checkout_of_descendant_after_reset_has_no_conflicts(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    commit_file(dir, "c.txt", "three", "Add c");
    run_gitlet_command(dir, &["branch", "dev"]).assert().success();

    run_gitlet_command(dir, &["reset", first.as_str()]).assert().success();
    assert!(!dir.join("c.txt").exists());

    run_gitlet_command(dir, &["checkout", "dev"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("c.txt")), "three");
    assert_eq!(read_file(&dir.join("a.txt")), "one");
}

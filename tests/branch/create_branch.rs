use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_the_current_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);

    run_gitlet_command(dir, &["branch", "dev"]).assert().success();

    // creating a branch does not switch to it
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Branches ===\ndev\n*master\n"));

    commit_file(dir, "c.txt", "three", "Only on master");
    run_gitlet_command(dir, &["checkout", "dev"]).assert().success();

    assert_eq!(head_commit_id(dir), head);
}

#[rstest]
#[case("feature/login")]
#[case("fix-42")]
#[case("release_1.0")]
fn create_branch_with_valid_name(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\n{name}\n")));
}

#[rstest]
#[case("bad name")]
#[case("..")]
#[case("topic.lock")]
#[case("HEAD")]
fn create_branch_with_invalid_name_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
}

#[rstest]
fn create_duplicate_branch_fails(init_repository_dir: TempDir) {
    run_gitlet_command(init_repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();

    run_gitlet_command(init_repository_dir.path(), &["branch", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists: dev",
        ));
}

use crate::common::command::{init_repository_dir, read_head, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn cat_commit_accepts_ids_and_branch_names(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);
    let expected = "parent=none\ndate=2023-01-01T12:00:00+00:00\nmessage=Initial commit\n";

    run_wit_command(dir, &["cat-commit", &head])
        .assert()
        .success()
        .stdout(expected);
    run_wit_command(dir, &["cat-commit", "master"])
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}

#[rstest]
fn cat_commit_of_unknown_id_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(init_repository_dir.path(), &["cat-commit", &"0".repeat(40)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid commit id"));

    Ok(())
}

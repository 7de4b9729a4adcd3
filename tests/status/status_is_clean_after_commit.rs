use crate::common::command::{init_repository_dir, read_head, run_wit_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn status_is_clean_after_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);

    run_wit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(format!(
            "HEAD: {}\nOn branch master\n\nnothing to commit, working tree clean\n",
            head
        ));

    Ok(())
}

#[rstest]
fn status_is_idempotent(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("1.txt"), "changed")?;
    std::fs::write(dir.join("new.txt"), "new")?;

    let first = stdout_of(dir, &["status"]);
    let second = stdout_of(dir, &["status"]);

    assert_eq!(first, second);

    Ok(())
}

#[rstest]
fn status_without_commits(repository_dir_with_file: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir_with_file.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No commits yet\n"))
        .stdout(predicate::str::contains("Untracked files:"));

    Ok(())
}

#[rstest::fixture]
fn repository_dir_with_file() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_wit_command(dir.path(), &["init"]).assert().success();
    std::fs::write(dir.path().join("1.txt"), "one").expect("Failed to write file");
    dir
}

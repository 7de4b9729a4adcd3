use crate::common::command::{repository_dir, run_wit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn adding_a_missing_file_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_wit_command(dir, &["init"]).assert().success();

    run_wit_command(dir, &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}

#[rstest]
fn adding_a_path_outside_the_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let project = dir.join("project");
    std::fs::create_dir_all(&project)?;
    run_wit_command(&project, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("outside.txt"), "x".to_string()));

    run_wit_command(&project, &["add", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the repository"));

    Ok(())
}

#[rstest]
fn a_failing_path_stages_nothing(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_wit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));

    run_wit_command(dir, &["add", "1.txt", "missing.txt"])
        .assert()
        .failure();

    repository_dir
        .child(".wit/staging_area/1.txt")
        .assert(predicate::path::missing());

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a wit repository"));

    Ok(())
}

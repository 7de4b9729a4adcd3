use crate::common::command::{
    init_repository_dir, read_head, read_ref, repository_dir, run_wit_command,
    wit_add_and_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("feature")]
#[case("feature/login")]
#[case("fix-123")]
#[case("a".repeat(39))]
fn create_branch_with_valid_name(
    init_repository_dir: TempDir,
    #[case] name: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_wit_command(dir, &["branch", &name]).assert().success();

    assert_eq!(read_ref(dir, &name), read_head(dir));

    Ok(())
}

#[rstest]
fn creating_an_existing_branch_rebinds_it_to_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("x"), "x".to_string()));
    wit_add_and_commit(dir, "Second");

    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(read_ref(dir, "feature"), read_head(dir));

    Ok(())
}

#[rstest]
fn create_branch_without_commits_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_wit_command(dir, &["init"]).assert().success();

    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no history yet"));

    Ok(())
}

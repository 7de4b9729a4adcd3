use crate::common::command::{init_repository_dir, read_head, run_wit_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_refuses_a_dirty_working_tree(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);
    write_file(FileSpec::new(dir.join("1.txt"), "local edit".to_string()));

    run_wit_command(dir, &["checkout", &head])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uncommitted changes"))
        .stderr(predicate::str::contains("modified:   1.txt"));

    assert_eq!(read_file(&dir.join("1.txt")), "local edit");
    assert_eq!(read_head(dir), head);
    init_repository_dir.child(".wit/staging_area/1.txt").assert("one");
    init_repository_dir.child(".wit/activated.txt").assert("master");

    Ok(())
}

#[rstest]
fn checkout_refuses_staged_changes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "other"])
        .assert()
        .success();
    let head = read_head(dir);
    write_file(FileSpec::new(dir.join("1.txt"), "staged edit".to_string()));
    run_wit_command(dir, &["add", "1.txt"])
        .assert()
        .success();

    run_wit_command(dir, &["checkout", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uncommitted changes"))
        .stderr(predicate::str::contains("Changes to be committed:"));

    assert_eq!(read_file(&dir.join("1.txt")), "staged edit");
    assert_eq!(read_head(dir), head);
    init_repository_dir.child(".wit/staging_area/1.txt").assert("staged edit");
    init_repository_dir.child(".wit/activated.txt").assert("master");

    Ok(())
}

#[rstest]
fn untracked_files_do_not_block_checkout(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);
    write_file(FileSpec::new(dir.join("untracked.txt"), "?".to_string()));

    run_wit_command(dir, &["checkout", &head])
        .assert()
        .success();

    init_repository_dir.child("untracked.txt").assert("?");

    Ok(())
}

#[rstest]
fn checkout_unknown_commit_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);
    let unknown = "f".repeat(40);

    run_wit_command(dir, &["checkout", &unknown])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid commit id"));

    assert_eq!(read_head(dir), head);

    Ok(())
}

#[rstest]
fn checkout_unknown_branch_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_wit_command(init_repository_dir.path(), &["checkout", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch missing not found"));

    Ok(())
}

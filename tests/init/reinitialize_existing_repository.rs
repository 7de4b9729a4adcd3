use crate::common::command::{init_repository_dir, read_head, run_wit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn reinitialize_existing_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);

    run_wit_command(dir, &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing wit repository in",
        ));

    assert_eq!(read_head(dir), head);

    Ok(())
}

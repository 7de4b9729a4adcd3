use crate::common::command::{
    init_repository_dir, read_head, read_ref, run_wit_command, stdout_of, wit_add_and_commit,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::parse_parents;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///
///       A
///      / \
///     B   C
///     (master adds x, feature adds y)
#[rstest]
fn merge_combines_both_additions(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    // B on master
    write_file(FileSpec::new(dir.join("x"), "x".to_string()));
    wit_add_and_commit(dir, "Commit B");
    let b = read_head(dir);

    // C on feature
    run_wit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    std::fs::remove_file(dir.join("x"))?;
    write_file(FileSpec::new(dir.join("y"), "y".to_string()));
    wit_add_and_commit(dir, "Commit C");
    let c = read_head(dir);

    run_wit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_wit_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Merged feature into master as [0-9a-f]{6}\n$",
        )?);

    let merge = read_head(dir);
    assert_eq!(read_ref(dir, "master"), merge);
    assert_eq!(read_ref(dir, "feature"), c);

    let metadata = stdout_of(dir, &["cat-commit", &merge]);
    assert_eq!(parse_parents(&metadata), vec![b, c]);
    assert!(metadata.ends_with("message=Merging commit\n"));

    let snapshot = init_repository_dir.child(format!(".wit/images/{}", merge));
    snapshot.child("x").assert("x");
    snapshot.child("y").assert("y");
    snapshot.child("1.txt").assert("one");
    snapshot.child("a/b/3.txt").assert("three");

    Ok(())
}

#[rstest]
fn merge_keeps_changes_from_both_sides(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("1.txt"), "master one".to_string()));
    wit_add_and_commit(dir, "Master edits 1.txt");

    run_wit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "feature two".to_string()));
    wit_add_and_commit(dir, "Feature edits a/2.txt");

    run_wit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_wit_command(dir, &["merge", "feature"])
        .assert()
        .success();

    let merge = read_head(dir);
    let snapshot = init_repository_dir.child(format!(".wit/images/{}", merge));
    snapshot.child("1.txt").assert("master one");
    snapshot.child("a/2.txt").assert("feature two");

    Ok(())
}

#[rstest]
fn merge_conflicting_edit_keeps_head_version(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("1.txt"), "from master".to_string()));
    wit_add_and_commit(dir, "Master edit");

    run_wit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "from feature".to_string()));
    wit_add_and_commit(dir, "Feature edit");

    run_wit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_wit_command(dir, &["merge", "feature"])
        .assert()
        .success();

    let merge = read_head(dir);
    init_repository_dir
        .child(format!(".wit/images/{}/1.txt", merge))
        .assert("from master");

    Ok(())
}

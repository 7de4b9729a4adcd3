use crate::common::command::{
    init_repository_dir, read_head, repository_dir, run_wit_command, stdout_of,
    wit_add_and_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn short(id: &str) -> &str {
    &id[..6]
}

#[rstest]
fn graph_lists_reference_and_parent_edges(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let a = read_head(dir);
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("x"), "x".to_string()));
    wit_add_and_commit(dir, "Commit B");
    let b = read_head(dir);

    let graph = stdout_of(dir, &["graph"]);

    assert_eq!(
        graph,
        format!(
            "HEAD {b}\nfeature {a}\nmaster {b}\n{b} {a}\n",
            a = short(&a),
            b = short(&b)
        )
    );

    Ok(())
}

#[rstest]
fn graph_lists_both_parents_of_a_merge(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("x"), "x".to_string()));
    wit_add_and_commit(dir, "Commit B");
    let b = read_head(dir);

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
        .success();
    let merge = read_head(dir);

    let graph = stdout_of(dir, &["graph"]);
    let edges = graph.lines().collect::<Vec<_>>();

    assert!(edges.contains(&format!("{} {}", short(&merge), short(&b)).as_str()));
    assert!(edges.contains(&format!("{} {}", short(&merge), short(&c)).as_str()));
    // no duplicate edges
    let mut unique = edges.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), edges.len());

    Ok(())
}

#[rstest]
fn graph_of_empty_repository_is_empty(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_wit_command(dir, &["init"]).assert().success();

    assert_eq!(stdout_of(dir, &["graph"]), "");

    Ok(())
}

use crate::common::command::{init_repository_dir, read_head, run_wit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_ref_lists_head_first_then_branches(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = read_head(dir);
    run_wit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_wit_command(dir, &["show-ref"])
        .assert()
        .success()
        .stdout(format!(
            "HEAD={head}\nfeature={head}\nmaster={head}\n",
            head = head
        ));

    Ok(())
}

use crate::common::command::{index_path, init_repository_dir, run_lit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_non_existent_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("real.txt"), "real".to_string()));

    run_lit_command(dir.path(), &["add", "real.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"))
        .stderr(predicate::str::contains("not found"));

    // nothing is staged when any path fails
    assert_eq!(std::fs::read_to_string(index_path(dir.path()))?, "[]");

    Ok(())
}

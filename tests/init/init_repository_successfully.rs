use crate::common::command::{index_path, repository_dir, run_lit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty lit repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let lit_dir = repository_dir.path().join(".lit");
    assert!(lit_dir.join("objects").is_dir());
    assert_eq!(std::fs::read_to_string(lit_dir.join("HEAD"))?, "");
    assert_eq!(std::fs::read_to_string(index_path(repository_dir.path()))?, "[]");

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.lit/objects")
            .is_dir()
    );

    Ok(())
}

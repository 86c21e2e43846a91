use crate::common::command::{
    get_commit_chain, get_head_commit_sha, repository_dir, run_lit_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn shell_initializes_and_runs_commands(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("f.txt"), "hello\n".to_string()));

    run_lit_command(dir.path(), &["shell"])
        .write_stdin("add f.txt\ncommit first   snapshot\nhead\nexit\nlog\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty lit repository in "))
        .stdout(predicate::str::is_match(
            r"\[root-commit [0-9a-f]{7}\] first snapshot\n[0-9a-f]{40}\n$",
        )?);

    let head = get_head_commit_sha(dir.path())?;
    assert_eq!(get_commit_chain(dir.path())?, vec![head]);

    Ok(())
}

#[rstest]
fn shell_is_the_default_command(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_lit_command(dir.path(), &[])
        .write_stdin("head\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("No commits yet\n"));

    assert!(dir.path().join(".lit").join("objects").is_dir());

    Ok(())
}

#[rstest]
fn shell_stops_at_end_of_input(repository_dir: TempDir) {
    run_lit_command(repository_dir.path(), &["shell"])
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stderr("");
}

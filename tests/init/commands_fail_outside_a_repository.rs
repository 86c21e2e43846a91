use crate::common::command::{repository_dir, run_lit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["log"])]
#[case(&["diff"])]
#[case(&["commit", "-m", "nothing here"])]
fn commands_fail_outside_a_repository(
    repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a lit repository"));

    assert!(!repository_dir.path().join(".lit").exists());

    Ok(())
}

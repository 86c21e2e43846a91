use crate::common::command::{
    get_commit_chain, init_repository_dir, repository_with_three_commits, run_lit_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn diff_output(dir: &std::path::Path, args: &[&str]) -> String {
    let output = run_lit_command(dir, args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output).expect("diff output is not UTF-8")
}

#[rstest]
fn diff_without_commits(init_repository_dir: TempDir) {
    run_lit_command(init_repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout("No commits yet\n");
}

#[rstest]
fn diff_defaults_to_head(
    repository_with_three_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_three_commits;
    let chain = get_commit_chain(dir.path())?;

    assert_eq!(
        diff_output(dir.path(), &["diff"]),
        format!("commit {}\ng.txt: new file\n+new\n", chain[0])
    );

    Ok(())
}

#[rstest]
fn diff_of_modified_file_marks_each_line(
    repository_with_three_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_three_commits;
    let chain = get_commit_chain(dir.path())?;

    assert_eq!(
        diff_output(dir.path(), &["diff", &chain[1]]),
        format!("commit {}\nf.txt: modified\n hello\n+world\n", chain[1])
    );

    Ok(())
}

#[rstest]
fn diff_of_first_commit_adds_every_line(
    repository_with_three_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_three_commits;
    let chain = get_commit_chain(dir.path())?;

    assert_eq!(
        diff_output(dir.path(), &["diff", &chain[2].to_uppercase()]),
        format!("commit {}\nf.txt: first commit\n+hello\n", chain[2])
    );

    Ok(())
}

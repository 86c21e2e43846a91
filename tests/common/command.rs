use crate::common::FIXED_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with two commits touching `f.txt`, then a third adding `g.txt`
#[fixture]
pub fn repository_with_three_commits(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("f.txt"), "hello\n".to_string()));
    run_lit_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    lit_commit(dir.path(), "first").assert().success();

    write_file(FileSpec::new(
        dir.path().join("f.txt"),
        "hello\nworld\n".to_string(),
    ));
    run_lit_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    lit_commit(dir.path(), "second").assert().success();

    write_file(FileSpec::new(dir.path().join("g.txt"), "new\n".to_string()));
    run_lit_command(dir.path(), &["add", "g.txt"])
        .assert()
        .success();
    lit_commit(dir.path(), "third").assert().success();

    dir
}

pub fn run_lit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lit").expect("Failed to find lit binary");
    cmd.envs(vec![("NO_COLOR", "1"), ("LIT_COMMIT_DATE", FIXED_DATE)]);
    cmd.env_remove("LIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn lit_commit(dir: &Path, message: &str) -> Command {
    run_lit_command(dir, &["commit", "-m", message])
}

/// Get the current HEAD commit SHA, empty when there are no commits
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(".lit").join("HEAD"))?;
    Ok(head_content.trim().to_string())
}

/// Walk parent links from HEAD and return every commit SHA, newest first
pub fn get_commit_chain(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut chain = Vec::new();
    let mut current = Some(get_head_commit_sha(dir)?).filter(|sha| !sha.is_empty());

    while let Some(sha) = current {
        let commit = crate::common::read_json(&object_path(dir, &sha));
        current = commit["parent"].as_str().map(String::from);
        chain.push(sha);
    }

    Ok(chain)
}

pub fn object_path(dir: &Path, sha: &str) -> std::path::PathBuf {
    dir.join(".lit").join("objects").join(sha)
}

pub fn index_path(dir: &Path) -> std::path::PathBuf {
    dir.join(".lit").join("index")
}

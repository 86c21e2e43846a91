use crate::common::command::{
    get_commit_chain, get_head_commit_sha, init_repository_dir, lit_commit, object_path,
    run_lit_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::{digest, read_json};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn second_commit_links_to_the_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let file = dir.path().join("f.txt");

    write_file(FileSpec::new(file.clone(), "hello\n".to_string()));
    run_lit_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    lit_commit(dir.path(), "first").assert().success();
    let first = get_head_commit_sha(dir.path())?;

    write_file(FileSpec::new(file, "hello\nworld\n".to_string()));
    run_lit_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    lit_commit(dir.path(), "second")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[[0-9a-f]{7}\] second\n$")?);
    let second = get_head_commit_sha(dir.path())?;

    assert_ne!(first, second);
    let commit = read_json(&object_path(dir.path(), &second));
    assert_eq!(commit["parent"], json!(first));
    assert_eq!(
        commit["files"],
        json!([{ "path": "f.txt", "hash": digest("hello\nworld\n") }])
    );
    assert_eq!(get_commit_chain(dir.path())?, vec![second, first]);

    Ok(())
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(6)]
fn chain_length_matches_commit_count(
    init_repository_dir: TempDir,
    #[case] commits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    for i in 0..commits {
        lit_commit(dir.path(), &format!("commit {i}"))
            .assert()
            .success();
    }

    assert_eq!(get_commit_chain(dir.path())?.len(), commits);

    Ok(())
}

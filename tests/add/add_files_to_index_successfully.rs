use crate::common::command::{index_path, init_repository_dir, run_lit_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use crate::common::{count_objects, digest, read_json};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn add_single_file_to_index_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("f.txt"), "hello\n".to_string()));

    run_lit_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    assert_eq!(
        read_json(&index_path(dir.path())),
        json!([{ "path": "f.txt", "hash": digest("hello\n") }])
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join(".lit/objects").join(digest("hello\n")))?,
        "hello\n"
    );

    Ok(())
}

#[rstest]
fn add_multiple_files_incrementally_in_call_order(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let files = write_generated_files(dir.path(), 4);

    // stage the last file first to show the index keeps call order, not name order
    let mut call_order = files.clone();
    call_order.reverse();
    for file in &call_order {
        let name = file.path.file_name().unwrap().to_string_lossy().to_string();
        run_lit_command(dir.path(), &["add", &name])
            .assert()
            .success();
    }

    let expected = call_order
        .iter()
        .map(|file| {
            json!({
                "path": file.path.file_name().unwrap().to_string_lossy(),
                "hash": digest(&file.content),
            })
        })
        .collect::<Vec<_>>();
    assert_eq!(read_json(&index_path(dir.path())), json!(expected));

    Ok(())
}

#[rstest]
fn add_nested_file_with_repository_relative_path(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(
        dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_lit_command(&dir.path().join("a"), &["-C", "..", "add", "a/b/3.txt"])
        .assert()
        .success();

    assert_eq!(
        read_json(&index_path(dir.path())),
        json!([{ "path": "a/b/3.txt", "hash": digest("three") }])
    );

    Ok(())
}

#[rstest]
fn identical_content_is_stored_once(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("1.txt"), "same".to_string()));
    write_file(FileSpec::new(dir.path().join("2.txt"), "same".to_string()));

    run_lit_command(dir.path(), &["add", "1.txt", "2.txt"])
        .assert()
        .success();

    assert_eq!(count_objects(dir.path()), 1);
    assert_eq!(
        read_json(&index_path(dir.path())),
        json!([
            { "path": "1.txt", "hash": digest("same") },
            { "path": "2.txt", "hash": digest("same") },
        ])
    );

    Ok(())
}

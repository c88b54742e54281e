use super::*;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}-{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should work")
            .as_nanos()
    ))
}

#[test]
fn write_creates_missing_parent_directories() {
    let root = unique_temp_dir("qa-assist-artifact-io");
    let path = root.join("cypress").join("e2e").join("generated.cy.js");

    write_text_file_creating_parents(&path, "describe('x', () => {});").expect("write");
    let text = read_text_file(&path).expect("read back");
    let _ = fs::remove_dir_all(&root);

    assert_eq!(text, "describe('x', () => {});");
}

#[test]
fn write_without_parent_component_succeeds() {
    let root = unique_temp_dir("qa-assist-artifact-flat");
    fs::create_dir_all(&root).expect("create root");
    let path = root.join("report.md");

    write_text_file_creating_parents(&path, "# Report\n").expect("write");
    let text = read_text_file(&path).expect("read back");
    let _ = fs::remove_dir_all(&root);

    assert_eq!(text, "# Report\n");
}

#[test]
fn read_missing_file_is_not_found() {
    let path = unique_temp_dir("qa-assist-missing").join("nope.js");
    let err = read_text_file(&path).expect_err("should fail");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

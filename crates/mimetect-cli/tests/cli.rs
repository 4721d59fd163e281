//! CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn mimetect() -> Command {
    Command::cargo_bin("mimetect").expect("binary builds")
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

#[test]
fn detects_zip_by_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "payload", &[0x50, 0x4b, 0x03, 0x04, 0x00]);

    mimetect()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("application/zip"));
}

#[test]
fn detects_by_extension_first() {
    let dir = tempfile::tempdir().unwrap();
    // Zip bytes, but the .txt extension is authoritative.
    let path = write_file(&dir, "notes.txt", &[0x50, 0x4b, 0x03, 0x04]);

    mimetect()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("text/plain"));
}

#[test]
fn unknown_content_reports_octet_stream() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "mystery", &[0x00, 0x01, 0x02]);

    mimetect()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("application/octet-stream"));
}

#[test]
fn missing_file_fails() {
    mimetect().arg("/no/such/file").assert().failure();
}

#[test]
fn list_prints_registered_types() {
    mimetect()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("text/html"))
        .stdout(predicate::str::contains("application/pdf"));
}

#[test]
fn custom_database_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let db = write_file(
        &dir,
        "types.toml",
        br#"
[[mime-type]]
name = "application/x-custom"
ext = ["cst"]
"#,
    );
    let path = write_file(&dir, "sample.cst", b"anything");

    mimetect()
        .arg("--database")
        .arg(&db)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("application/x-custom"));
}

#[test]
fn unreadable_database_is_an_error() {
    mimetect()
        .arg("--database")
        .arg("/no/such/db.toml")
        .arg("whatever")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading dataset"));
}

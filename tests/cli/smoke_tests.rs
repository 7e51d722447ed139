use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn pdirfile() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pdirfile"));
    cmd.env_remove("PDIRFILE_LOG").env_remove("PDIRFILE_GROWTH_INCREMENT");
    cmd
}

#[test]
fn shows_help() {
    pdirfile().arg("--help").assert().success().stdout(predicate::str::contains("pdirfile"));
}

#[test]
fn lists_matching_entries_as_jsonl() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    pdirfile()
        .arg("list")
        .arg(dir.path())
        .args(["--pattern", ".txt", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"a.txt\""))
        .stdout(predicate::str::contains("b.log").not());
}

#[test]
fn growable_listing_matches_counted_listing() {
    let dir = tempdir().unwrap();
    for i in 0..12 {
        fs::write(dir.path().join(format!("f{i:02}")), "").unwrap();
    }

    let counted = pdirfile().arg("list").arg(dir.path()).args(["--format", "json"]).output().unwrap();
    let growable = pdirfile()
        .arg("list")
        .arg(dir.path())
        .args(["--format", "json", "--no-count", "--growth-increment", "5"])
        .output()
        .unwrap();

    assert!(counted.status.success());
    assert!(growable.status.success());
    let counted: serde_json::Value = serde_json::from_slice(&counted.stdout).unwrap();
    let growable: serde_json::Value = serde_json::from_slice(&growable.stdout).unwrap();
    assert_eq!(counted.as_array().map(Vec::len), Some(12));
    assert_eq!(counted, growable);
}

#[test]
fn missing_directory_fails() {
    let dir = tempdir().unwrap();
    pdirfile()
        .arg("list")
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn mkdir_recursive_then_error_if_exists() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("new/deep/path");

    pdirfile().arg("mkdir").arg("-p").arg(&target).assert().success();
    assert!(target.is_dir());

    pdirfile().arg("mkdir").arg("-p").arg(&target).assert().success();

    pdirfile()
        .arg("mkdir")
        .arg("-p")
        .arg("--error-if-exists")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn zero_growth_increment_is_rejected() {
    let dir = tempdir().unwrap();
    pdirfile()
        .arg("list")
        .arg(dir.path())
        .args(["--no-count", "--growth-increment", "0"])
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn open_with_explicit_application() {
    pdirfile().args(["open", "Cargo.toml", "--app", "true"]).assert().success();
    pdirfile().args(["open", "Cargo.toml", "--app", "false"]).assert().failure();
}

#[test]
fn verbose_flag_logs_to_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    pdirfile()
        .arg("-vv")
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[DEBUG pdirfile_usecase::lister] listed"));
}

#[test]
fn mkdir_over_existing_file_succeeds_without_error_if_exists() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes");
    fs::write(&file, "").unwrap();

    pdirfile().arg("mkdir").arg(&file).assert().success();
    pdirfile().arg("mkdir").arg("--error-if-exists").arg(&file).assert().failure();
}

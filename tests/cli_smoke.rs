use assert_cmd::prelude::*;
use chrono::{Local, TimeZone};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn ts(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    Local
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap()
        .timestamp()
}

fn write_dataset(root: &Path) -> PathBuf {
    let data_dir = root.join("projx");
    fs::create_dir_all(&data_dir).unwrap();

    let authors = json!([
        {"id": "alice", "name": "Alice Doe"},
        {"id": "bob"},
        {"id": "carol"},
    ]);
    let files = json!(["f.py"]);
    let commits = json!([
        {"id": "c1", "timestamp": ts(2024, 3, 1, 12), "author_id": "alice", "files": ["f.py"]},
        {"id": "c2", "timestamp": ts(2024, 3, 2, 12), "author_id": "bob", "files": ["f.py"]},
    ]);

    fs::write(data_dir.join("authors.json"), authors.to_string()).unwrap();
    fs::write(data_dir.join("files.json"), files.to_string()).unwrap();
    fs::write(data_dir.join("commits.json"), commits.to_string()).unwrap();
    data_dir
}

#[test]
fn build_writes_graph_records() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());
    let save_dir = dir.path().join("out");

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .arg("build")
        .arg("--save")
        .arg(&save_dir);
    cmd.assert().success();

    let out_path = save_dir
        .join("projx")
        .join("code_author_inter-(window_size-7)-no_overlap.json");
    let contents = fs::read_to_string(&out_path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&contents).unwrap();

    let arr = records.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["first_day"], json!("2024-03-01"));
    assert_eq!(arr[0]["code_author_interaction"]["alice"], json!(["bob"]));
    assert_eq!(arr[0]["code_author_interaction"]["bob"], json!(["alice"]));
    assert_eq!(arr[0]["code_author_interaction"]["carol"], json!([]));
}

#[test]
fn rerun_produces_byte_identical_output() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());
    let save_dir = dir.path().join("out");
    let out_path = save_dir
        .join("projx")
        .join("code_author_inter-(window_size-7)-no_overlap.json");

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("cograph").unwrap();
        cmd.arg("--data")
            .arg(&data_dir)
            .arg("build")
            .arg("--save")
            .arg(&save_dir);
        cmd.assert().success();
    }
    let first = fs::read(&out_path).unwrap();

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .arg("build")
        .arg("--save")
        .arg(&save_dir);
    cmd.assert().success();
    let second = fs::read(&out_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn name_flag_overrides_experiment_directory() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());
    let save_dir = dir.path().join("out");

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .arg("build")
        .arg("--save")
        .arg(&save_dir)
        .args(["--name", "myexp"]);
    cmd.assert().success();

    assert!(save_dir
        .join("myexp")
        .join("code_author_inter-(window_size-7)-no_overlap.json")
        .exists());
}

#[test]
fn overlap_flag_is_encoded_in_the_file_name() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());
    let save_dir = dir.path().join("out");

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .arg("--overlap-windows")
        .args(["--stride", "2"])
        .arg("build")
        .arg("--save")
        .arg(&save_dir);
    cmd.assert().success();

    assert!(save_dir
        .join("projx")
        .join("code_author_inter-(window_size-7)-overlap.json")
        .exists());
}

#[test]
fn summary_prints_window_digest() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data").arg(&data_dir).arg("summary");
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8_lossy(&output);
    assert!(stdout.contains("Windows: 1"));
}

#[test]
fn zero_window_size_is_rejected() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .args(["--window-size", "0"])
        .arg("build")
        .arg("--save")
        .arg(dir.path().join("out"));
    cmd.assert().failure();
}

#[test]
fn empty_commit_list_fails_the_run() {
    let dir = tempdir().unwrap();
    let data_dir = write_dataset(dir.path());
    fs::write(data_dir.join("commits.json"), "[]").unwrap();

    let mut cmd = Command::cargo_bin("cograph").unwrap();
    cmd.arg("--data")
        .arg(&data_dir)
        .arg("build")
        .arg("--save")
        .arg(dir.path().join("out"));
    cmd.assert().failure();
}

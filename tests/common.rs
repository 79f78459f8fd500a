#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    let mut cmd = cargo_bin_cmd!("scpayroll");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_scpayroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB with the seed roster
pub fn init_db(db_path: &str) {
    sc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Two days for emp_001 in the first half of January 2026: 7.5h + 3.0h
pub fn init_db_with_entries(db_path: &str) {
    init_db(db_path);

    sc().args([
        "--db",
        db_path,
        "entry",
        "emp_001",
        "2026-01-05",
        "--in",
        "08:30",
        "--out",
        "16:30",
    ])
    .assert()
    .success();

    sc().args([
        "--db",
        db_path,
        "entry",
        "emp_001",
        "2026-01-06",
        "--in",
        "09:00",
        "--out",
        "12:00",
        "--lunch",
        "0",
    ])
    .assert()
    .success();
}

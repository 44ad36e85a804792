#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtk() -> Command {
    cargo_bin_cmd!("rtimekeeper")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimekeeper.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimekeeper_out", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Local timestamp on a fixed day, for deterministic logs
pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .earliest()
        .expect("valid local time")
}

/// Run a CLI command against `db_path` and assert success
pub fn run_ok(db_path: &str, args: &[&str]) {
    let mut full = vec!["--db", db_path];
    full.extend_from_slice(args);
    rtk().args(&full).assert().success();
}

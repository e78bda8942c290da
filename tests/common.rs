#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("serenitylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_serenitylog.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    slog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for at in [
        "2024-01-01 10:00",
        "2024-01-01 23:59",
        "2024-01-02 00:01",
        "2024-02-15 12:30",
    ] {
        slog()
            .args(["--db", db_path, "add", "--at", at])
            .assert()
            .success();
    }
}

/// Helper to populate many moments directly via the library DB API
pub fn populate_many_moments(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    serenitylog::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let day = (i % 28) + 1; // 1..28
        let ts = chrono::NaiveDateTime::parse_from_str(
            &format!("2024-11-{day:02} 09:00:00"),
            "%Y-%m-%d %H:%M:%S",
        )
        .expect("timestamp");
        serenitylog::db::queries::record_moment(&conn, ts).expect("record moment");
    }
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, setup_test_db, slog};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_init_with_relative_db_name_lands_in_config_dir() {
    let name = "relative_init_serenitylog.sqlite";
    let resolved = serenitylog::config::Config::config_dir().join(name);
    std::fs::remove_file(&resolved).ok();
    std::fs::remove_file(name).ok();

    slog()
        .args(["--db", name, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // The created and the migrated file must be the same one, inside the
    // config dir.
    let conn = rusqlite::Connection::open(&resolved).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'moments'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);

    // Nothing stray in the working directory.
    assert!(!std::path::Path::new(name).exists());

    std::fs::remove_file(&resolved).ok();
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_twice");

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_add_records_a_moment_and_prints_counts() {
    let db_path = setup_test_db("add");

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "add", "--at", "2024-06-10 14:30"])
        .assert()
        .success()
        .stdout(contains("Moment recorded at 2024-06-10 14:30:00"))
        .stdout(contains("Today:"))
        .stdout(contains("This week:"))
        .stdout(contains("This month:"));
}

#[test]
fn test_add_rejects_malformed_timestamp() {
    let db_path = setup_test_db("add_bad_ts");

    slog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slog()
        .args(["--db", &db_path, "add", "--at", "10/06/2024 14:30"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp format"));
}

#[test]
fn test_add_without_init_fails_cleanly() {
    let db_path = setup_test_db("add_no_init");

    slog()
        .args(["--db", &db_path, "add"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_list_shows_recorded_moments() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01 10:00:00"))
        .stdout(contains("2024-01-02 00:01:00"))
        .stdout(contains("2024-02-15 12:30:00"))
        .stdout(contains("4 times total"));
}

#[test]
fn test_list_filters_by_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-01 10:00:00"))
        .stdout(contains("2024-01-02 00:01:00"))
        .stdout(contains("2024-02-15").not());
}

#[test]
fn test_list_supports_period_spans() {
    let db_path = setup_test_db("list_span");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "list", "--period", "2024-01:2024-02"])
        .assert()
        .success()
        .stdout(contains("2024-01-01 10:00:00"))
        .stdout(contains("2024-02-15 12:30:00"));
}

#[test]
fn test_list_empty_period_reports_no_moments() {
    let db_path = setup_test_db("list_empty");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "list", "--period", "2023"])
        .assert()
        .success()
        .stdout(contains("No moments recorded"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total moments:"))
        .stdout(contains("4"));

    slog()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_migrate_on_existing_database() {
    let db_path = setup_test_db("db_migrate");
    init_db_with_data(&db_path);

    slog()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    // data survives a re-run of migrations
    slog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("4 times total"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let backup_path = common::temp_out("backup", "sqlite");

    slog()
        .args(["--db", &db_path, "backup", "--file", &backup_path])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&backup_path).exists());
}

#[test]
fn test_backup_declined_overwrite_keeps_existing_file() {
    let db_path = setup_test_db("backup_overwrite");
    init_db_with_data(&db_path);

    let backup_path = common::temp_out("backup_overwrite", "sqlite");
    std::fs::write(&backup_path, b"keep me").unwrap();

    slog()
        .args(["--db", &db_path, "backup", "--file", &backup_path])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(std::fs::read(&backup_path).unwrap(), b"keep me");

    std::fs::remove_file(&backup_path).ok();
}

#[test]
fn test_backup_with_compression_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let backup_path = common::temp_out("backup_zip", "sqlite");

    slog()
        .args([
            "--db",
            &db_path,
            "backup",
            "--file",
            &backup_path,
            "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&backup_path).with_extension("zip");
    assert!(zip_path.exists());
}

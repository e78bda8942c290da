//! Schema migration engine.
//! Each migration is idempotent and keyed off sqlite_master / PRAGMA
//! table_info, so `run_pending_migrations` is safe to call on every startup.

use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `moments` table exists.
fn moments_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='moments'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `moments` table has a given column.
fn moments_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('moments')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `moments` table with the modern schema.
fn create_moments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS moments (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp  TEXT NOT NULL,
            day_key    TEXT NOT NULL,
            source     TEXT NOT NULL DEFAULT 'cli'
        );

        CREATE INDEX IF NOT EXISTS idx_moments_timestamp ON moments(timestamp);
        CREATE INDEX IF NOT EXISTS idx_moments_day_key ON moments(day_key);
        "#,
    )?;
    Ok(())
}

/// Migrate an early `moments` table that predates the `source` column.
fn migrate_add_source_to_moments(conn: &Connection) -> Result<()> {
    if !moments_table_exists(conn)? {
        return Ok(());
    }

    if moments_has_column(conn, "source")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE moments ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';")?;
    Ok(())
}

/// Backfill `day_key` for rows where it is empty.
/// Day keys are otherwise frozen at insertion time; the backfill only covers
/// rows imported without one (timestamp prefix IS the key by construction).
fn migrate_backfill_day_keys(conn: &Connection) -> Result<()> {
    if !moments_table_exists(conn)? {
        return Ok(());
    }

    conn.execute(
        "UPDATE moments SET day_key = substr(timestamp, 1, 10)
         WHERE day_key IS NULL OR day_key = ''",
        [],
    )?;
    Ok(())
}

/// Run every pending migration, in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_moments_table(conn)?;
    migrate_add_source_to_moments(conn)?;
    migrate_backfill_day_keys(conn)?;
    Ok(())
}

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA_VERSION: i64 = 1;

/// Check if a table exists.
pub(crate) fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn user_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Create the roster / period / entry / audit tables.
fn create_schema_v1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id         TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            is_active  INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS periods (
            employee_id   TEXT NOT NULL REFERENCES employees(id),
            period_key    TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'Draft'
                          CHECK(status IN ('Draft','Submitted','Approved')),
            last_updated  TEXT,
            PRIMARY KEY (employee_id, period_key)
        );

        CREATE TABLE IF NOT EXISTS entries (
            employee_id  TEXT NOT NULL,
            period_key   TEXT NOT NULL,
            date         TEXT NOT NULL,
            start_time   TEXT,
            end_time     TEXT,
            lunch_break  REAL NOT NULL DEFAULT 0.5,
            total_hours  REAL NOT NULL DEFAULT 0,
            notes        TEXT NOT NULL DEFAULT '',
            is_sick_day  INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (employee_id, period_key, date),
            FOREIGN KEY (employee_id, period_key) REFERENCES periods(employee_id, period_key)
        );

        CREATE TABLE IF NOT EXISTS audit_log (
            seq           INTEGER PRIMARY KEY AUTOINCREMENT,
            id            TEXT NOT NULL UNIQUE,
            timestamp     TEXT NOT NULL,
            actor_type    TEXT NOT NULL CHECK(actor_type IN ('staff','admin')),
            subject_name  TEXT NOT NULL,
            action        TEXT NOT NULL,
            details       TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_entries_period ON entries(employee_id, period_key);
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = user_version(conn)?;

    if version < 1 || !table_exists(conn, "employees")? {
        create_schema_v1(conn)?;
        tracing::info!("created payroll schema v1");
    }

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

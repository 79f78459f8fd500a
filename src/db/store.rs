//! Load / save the full payroll state.

use crate::config::Config;
use crate::core::audit::AuditLog;
use crate::core::calculator::restore_entry;
use crate::core::state::PayrollState;
use crate::db::initialize::init_db;
use crate::db::migrate::table_exists;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::actor::ActorType;
use crate::models::employee::EmployeeRecord;
use crate::models::log_entry::AuditLogEntry;
use crate::models::period::{PeriodData, PeriodKey, PeriodStatus};
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::time::{format_time, parse_time};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, params};
use std::collections::BTreeMap;

fn corrupt(what: &str, value: &str) -> AppError {
    AppError::CorruptState(format!("{what}: '{value}'"))
}

/// Row values of the wrong SQLite type are bad content, not a database failure.
fn decode(e: rusqlite::Error) -> AppError {
    match e {
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => AppError::CorruptState(e.to_string()),
        other => AppError::Db(other),
    }
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| corrupt("timestamp", raw))
}

fn parse_opt_clock(raw: Option<String>) -> AppResult<Option<chrono::NaiveTime>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_time(s).map(Some).ok_or_else(|| corrupt("clock time", s)),
    }
}

/// Read the whole state. Any unreadable row is a `CorruptState` error.
pub fn load_state(conn: &Connection, audit_capacity: usize) -> AppResult<PayrollState> {
    let mut employees: BTreeMap<String, EmployeeRecord> = BTreeMap::new();

    {
        let mut stmt = conn.prepare("SELECT id, name, is_active FROM employees ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;
        for r in rows {
            let (id, name, active) = r.map_err(decode)?;
            let mut emp = EmployeeRecord::new(&id, name);
            emp.is_active = active != 0;
            employees.insert(id, emp);
        }
    }

    {
        let mut stmt =
            conn.prepare("SELECT employee_id, period_key, status, last_updated FROM periods")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?;
        for r in rows {
            let (emp_id, raw_key, raw_status, raw_updated) = r.map_err(decode)?;
            let key: PeriodKey = raw_key.parse().map_err(|_| corrupt("period key", &raw_key))?;
            let status =
                PeriodStatus::from_db_str(&raw_status).ok_or_else(|| corrupt("status", &raw_status))?;
            let last_updated = match raw_updated.as_deref() {
                None | Some("") => None,
                Some(s) => Some(parse_timestamp(s)?),
            };

            let emp = employees
                .get_mut(&emp_id)
                .ok_or_else(|| corrupt("period owner", &emp_id))?;
            emp.periods.insert(
                key,
                PeriodData {
                    status,
                    entries: BTreeMap::new(),
                    last_updated,
                },
            );
        }
    }

    {
        let mut stmt = conn.prepare(
            "SELECT employee_id, period_key, date, start_time, end_time,
                    lunch_break, notes, is_sick_day
             FROM entries",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, i64>(7)?,
            ))
        })?;
        for r in rows {
            let (emp_id, raw_key, raw_date, start, end, lunch, notes, sick) = r.map_err(decode)?;
            let key: PeriodKey = raw_key.parse().map_err(|_| corrupt("period key", &raw_key))?;
            let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
                .map_err(|_| corrupt("entry date", &raw_date))?;
            if !key.contains(date) {
                return Err(corrupt("entry", &format!("{emp_id} {raw_key} {raw_date}")));
            }

            let mut entry = TimeEntry {
                date,
                start_time: parse_opt_clock(start)?,
                end_time: parse_opt_clock(end)?,
                lunch_break_hours: lunch,
                total_hours: 0.0,
                notes,
                is_sick_day: sick != 0,
            };
            // total_hours is derived, never trusted from storage
            restore_entry(&mut entry)?;

            let period = employees
                .get_mut(&emp_id)
                .and_then(|e| e.periods.get_mut(&key))
                .ok_or_else(|| corrupt("entry owner", &format!("{emp_id} {raw_key}")))?;
            period.entries.insert(date, entry);
        }
    }

    let mut audit_entries = Vec::new();
    {
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, actor_type, subject_name, action, details
             FROM audit_log ORDER BY seq DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;
        for r in rows {
            let (id, ts, actor, subject_name, action, details) = r.map_err(decode)?;
            audit_entries.push(AuditLogEntry {
                id,
                timestamp: parse_timestamp(&ts)?,
                actor_type: ActorType::from_db_str(&actor).ok_or_else(|| corrupt("actor type", &actor))?,
                subject_name,
                action,
                details,
            });
        }
    }

    Ok(PayrollState::new(
        employees,
        AuditLog::from_entries(audit_entries, audit_capacity),
    ))
}

/// Replace the stored state with `state`. Callers wrap this in a transaction.
pub fn save_state(conn: &Connection, state: &PayrollState) -> AppResult<()> {
    conn.execute_batch(
        "DELETE FROM entries; DELETE FROM periods; DELETE FROM employees; DELETE FROM audit_log;",
    )?;

    let mut emp_stmt =
        conn.prepare_cached("INSERT INTO employees (id, name, is_active) VALUES (?1, ?2, ?3)")?;
    let mut period_stmt = conn.prepare_cached(
        "INSERT INTO periods (employee_id, period_key, status, last_updated) VALUES (?1, ?2, ?3, ?4)",
    )?;
    let mut entry_stmt = conn.prepare_cached(
        "INSERT INTO entries (employee_id, period_key, date, start_time, end_time,
                              lunch_break, total_hours, notes, is_sick_day)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )?;

    for emp in state.employees.values() {
        emp_stmt.execute(params![emp.id, emp.name, emp.is_active as i64])?;

        for (key, period) in &emp.periods {
            let key = key.to_string();
            period_stmt.execute(params![
                emp.id,
                key,
                period.status.as_str(),
                period.last_updated.map(|t| t.to_rfc3339()),
            ])?;

            for entry in period.entries.values() {
                entry_stmt.execute(params![
                    emp.id,
                    key,
                    entry.date_str(),
                    entry.start_time.as_ref().map(format_time),
                    entry.end_time.as_ref().map(format_time),
                    entry.lunch_break_hours,
                    entry.total_hours,
                    entry.notes,
                    entry.is_sick_day as i64,
                ])?;
            }
        }
    }

    // oldest first, so that seq order is chronological
    let mut log_stmt = conn.prepare_cached(
        "INSERT INTO audit_log (id, timestamp, actor_type, subject_name, action, details)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    let entries = state.audit.to_vec();
    for e in entries.iter().rev() {
        log_stmt.execute(params![
            e.id,
            e.timestamp.to_rfc3339(),
            e.actor_type.to_db_str(),
            e.subject_name,
            e.action,
            e.details,
        ])?;
    }

    Ok(())
}

/// Load the state, never failing on bad content.
///
/// An empty database yields the seed roster; unreadable content is reported
/// and replaced by the seed roster as well.
pub fn restore_or_seed(conn: &Connection, cfg: &Config) -> AppResult<PayrollState> {
    init_db(conn)?;
    load_or_seed(conn, cfg)
}

fn load_or_seed(conn: &Connection, cfg: &Config) -> AppResult<PayrollState> {
    match load_state(conn, cfg.audit_log_capacity) {
        Ok(state) if state.employees.is_empty() && state.audit.is_empty() => {
            tracing::debug!("no stored state, seeding roster");
            Ok(PayrollState::seeded(&cfg.seed_roster, cfg.audit_log_capacity))
        }
        Ok(state) => Ok(state),
        Err(AppError::Db(e)) => Err(AppError::Db(e)),
        Err(e) => {
            tracing::warn!(error = %e, "stored state unreadable, falling back to seed roster");
            warning(format!("Stored state is unreadable ({e}); starting from the seed roster."));
            Ok(PayrollState::seeded(&cfg.seed_roster, cfg.audit_log_capacity))
        }
    }
}

/// Read-only access: load (or seed) without writing anything back.
///
/// No schema is created here; a database that was never initialized reads as
/// the seed roster.
pub fn read_state(pool: &DbPool, cfg: &Config) -> AppResult<PayrollState> {
    if !table_exists(&pool.conn, "employees")? {
        return Ok(PayrollState::seeded(&cfg.seed_roster, cfg.audit_log_capacity));
    }
    load_or_seed(&pool.conn, cfg)
}

/// `load -> func -> save` as one all-or-nothing unit.
pub fn mutate<F, T>(pool: &mut DbPool, cfg: &Config, func: F) -> AppResult<T>
where
    F: FnOnce(&mut PayrollState) -> AppResult<T>,
{
    pool.with_write_tx(|tx| {
        let mut state = restore_or_seed(tx, cfg)?;
        let out = func(&mut state)?;
        save_state(tx, &state)?;
        Ok(out)
    })
}

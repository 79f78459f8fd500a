use chrono::{NaiveDate, NaiveTime};
use scpayroll::config::Config;
use scpayroll::core::state::PayrollState;
use scpayroll::db::initialize::init_db;
use scpayroll::db::pool::DbPool;
use scpayroll::db::snapshot::Snapshot;
use scpayroll::db::store::{load_state, mutate, read_state, restore_or_seed, save_state};
use scpayroll::errors::AppError;
use scpayroll::models::actor::Actor;
use scpayroll::models::period::{PeriodKey, PeriodStatus};
use scpayroll::models::time_entry::EntryPatch;
use std::env;

const EMP: &str = "emp_001";

fn key() -> PeriodKey {
    "2026-0-1st".parse().unwrap()
}

fn patch(start: &str, end: &str) -> EntryPatch {
    EntryPatch {
        start_time: Some(NaiveTime::parse_from_str(start, "%H:%M").ok()),
        end_time: Some(NaiveTime::parse_from_str(end, "%H:%M").ok()),
        notes: Some("front desk".into()),
        ..Default::default()
    }
}

fn populated(cfg: &Config) -> PayrollState {
    let mut s = PayrollState::seeded(&cfg.seed_roster, cfg.audit_log_capacity);
    let staff = Actor::staff(EMP);
    let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    s.update_entry(&staff, EMP, &key(), day, &patch("08:30", "16:30"))
        .unwrap();
    s.update_entry(
        &staff,
        EMP,
        &key(),
        day.succ_opt().unwrap(),
        &EntryPatch {
            is_sick_day: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    s.submit(&staff, EMP, &key()).unwrap();
    s.set_active(&Actor::Admin, "emp_003", false).unwrap();
    s
}

#[test]
fn test_empty_database_is_seeded() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();

    let state = read_state(&pool, &cfg).unwrap();
    assert_eq!(state.employees.len(), 3);
    assert_eq!(state.employee(EMP).unwrap().name, "John Doe");
    assert!(state.audit.is_empty());
}

#[test]
fn test_save_then_load_keeps_everything() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    let state = populated(&cfg);
    save_state(&pool.conn, &state).unwrap();

    let loaded = load_state(&pool.conn, cfg.audit_log_capacity).unwrap();
    assert_eq!(loaded, state);
    assert_eq!(
        loaded.period(EMP, &key()).unwrap().status,
        PeriodStatus::Submitted
    );
    assert!(!loaded.employee("emp_003").unwrap().is_active);
}

#[test]
fn test_failed_mutation_is_not_persisted() {
    let cfg = Config::default();
    let mut pool = DbPool::in_memory().unwrap();

    mutate(&mut pool, &cfg, |s| {
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        s.update_entry(&Actor::staff(EMP), EMP, &key(), day, &patch("08:30", "16:30"))?;
        Ok(())
    })
    .unwrap();

    let before = read_state(&pool, &cfg).unwrap();

    let res = mutate(&mut pool, &cfg, |s| {
        s.add_employee(&Actor::Admin, "Temp Worker")?;
        // fails after a successful step: the whole unit is rolled back
        s.approve(&Actor::Admin, EMP, &key())?;
        Ok(())
    });
    assert!(matches!(res, Err(AppError::InvalidTransition { .. })));

    let after = read_state(&pool, &cfg).unwrap();
    assert_eq!(before, after);
    assert_eq!(after.employees.len(), 3);
}

#[test]
fn test_corrupt_rows_fall_back_to_seed() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();

    pool.conn
        .execute_batch(
            "INSERT INTO employees (id, name, is_active) VALUES ('emp_050', 'Ghost', 1);
             INSERT INTO periods (employee_id, period_key, status) VALUES ('emp_050', 'not-a-key', 'Draft');",
        )
        .unwrap();

    assert!(matches!(
        load_state(&pool.conn, cfg.audit_log_capacity),
        Err(AppError::CorruptState(_))
    ));

    let state = restore_or_seed(&pool.conn, &cfg).unwrap();
    assert_eq!(state.employees.len(), 3);
    assert!(state.employee("emp_050").is_err());
}

#[test]
fn test_stored_totals_are_rederived() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    save_state(&pool.conn, &populated(&cfg)).unwrap();

    pool.conn
        .execute("UPDATE entries SET total_hours = 99", [])
        .unwrap();

    let loaded = load_state(&pool.conn, cfg.audit_log_capacity).unwrap();
    let period = loaded.period(EMP, &key()).unwrap();
    assert!(period.entries.values().all(|e| e.total_hours == 7.5));
}

#[test]
fn test_snapshot_round_trip_and_malformed_file() {
    let cfg = Config::default();
    let state = populated(&cfg);

    let mut path = env::temp_dir();
    path.push("store_tests_snapshot.json");
    Snapshot::from_state(&state).write(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"2026-0-1st\""));
    assert!(raw.contains("\"auditLog\""));
    assert!(raw.contains("\"startTime\": \"08:30\""));

    let restored = Snapshot::read(&path)
        .unwrap()
        .into_state(cfg.audit_log_capacity)
        .unwrap();
    assert_eq!(restored, state);

    std::fs::write(&path, "{ not json").unwrap();
    assert!(Snapshot::read(&path).is_err());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_snapshot_with_negative_lunch_is_rejected() {
    let cfg = Config::default();
    let mut path = env::temp_dir();
    path.push("store_tests_negative_lunch.json");

    std::fs::write(
        &path,
        r#"{
  "employees": {
    "emp_001": {
      "id": "emp_001",
      "name": "John Doe",
      "isActive": true,
      "periods": {
        "2026-0-1st": {
          "status": "Draft",
          "entries": {
            "2026-01-06": {
              "date": "2026-01-06",
              "startTime": "09:00",
              "endTime": "12:00",
              "lunchBreakHours": -5.0,
              "totalHours": 8.0,
              "notes": "",
              "isSickDay": false
            }
          },
          "lastUpdated": null
        }
      }
    }
  },
  "auditLog": []
}"#,
    )
    .unwrap();

    let res = Snapshot::read(&path)
        .unwrap()
        .into_state(cfg.audit_log_capacity);
    assert!(matches!(res, Err(AppError::CorruptState(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_snapshot_with_inverted_clock_span_is_rejected() {
    let cfg = Config::default();
    let mut state = populated(&cfg);
    let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let entry = state
        .employees
        .get_mut(EMP)
        .and_then(|e| e.periods.get_mut(&key()))
        .and_then(|p| p.entries.get_mut(&day))
        .unwrap();
    entry.start_time = NaiveTime::from_hms_opt(17, 0, 0);
    entry.end_time = NaiveTime::from_hms_opt(9, 0, 0);

    assert!(matches!(
        Snapshot::from_state(&state).into_state(cfg.audit_log_capacity),
        Err(AppError::CorruptState(_))
    ));
}

#[test]
fn test_mistyped_columns_fall_back_to_seed() {
    let cfg = Config::default();

    for corruption in [
        "UPDATE entries SET lunch_break = 'abc'",
        "UPDATE employees SET is_active = 'yes' WHERE id = 'emp_001'",
    ] {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        save_state(&pool.conn, &populated(&cfg)).unwrap();
        pool.conn.execute(corruption, []).unwrap();

        assert!(
            matches!(
                load_state(&pool.conn, cfg.audit_log_capacity),
                Err(AppError::CorruptState(_))
            ),
            "{corruption}"
        );

        let state = restore_or_seed(&pool.conn, &cfg).unwrap();
        assert_eq!(state, PayrollState::seeded(&cfg.seed_roster, cfg.audit_log_capacity));
    }
}

#[test]
fn test_negative_stored_lunch_falls_back_to_seed() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    save_state(&pool.conn, &populated(&cfg)).unwrap();

    pool.conn
        .execute("UPDATE entries SET lunch_break = -5 WHERE date = '2026-01-05'", [])
        .unwrap();

    let state = restore_or_seed(&pool.conn, &cfg).unwrap();
    assert!(state.employee(EMP).unwrap().periods.is_empty());
}

#[test]
fn test_sick_row_with_clock_times_is_normalized() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();
    init_db(&pool.conn).unwrap();
    save_state(&pool.conn, &populated(&cfg)).unwrap();

    pool.conn
        .execute(
            "UPDATE entries SET is_sick_day = 1, total_hours = 0 WHERE date = '2026-01-05'",
            [],
        )
        .unwrap();

    let loaded = load_state(&pool.conn, cfg.audit_log_capacity).unwrap();
    let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let entry = loaded.period(EMP, &key()).unwrap().entries[&day].clone();
    assert!(entry.is_sick_day);
    assert_eq!(entry.start_time, None);
    assert_eq!(entry.end_time, None);
    assert_eq!(entry.total_hours, 7.5);
    assert_eq!(entry.notes, "front desk");
}

#[test]
fn test_read_state_creates_no_schema() {
    let cfg = Config::default();
    let pool = DbPool::in_memory().unwrap();

    let state = read_state(&pool, &cfg).unwrap();
    assert_eq!(state.employees.len(), 3);

    let tables: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

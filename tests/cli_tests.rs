use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_entries, sc, setup_test_db, temp_out};

#[test]
fn test_init_seeds_roster() {
    let db_path = setup_test_db("init_seeds_roster");
    init_db(&db_path);

    sc().args(["--db", &db_path, "staff", "list"])
        .assert()
        .success()
        .stdout(contains("John Doe"))
        .stdout(contains("Jane Smith"))
        .stdout(contains("emp_003"));
}

#[test]
fn test_period_workflow_end_to_end() {
    let db_path = setup_test_db("workflow_end_to_end");
    init_db_with_entries(&db_path);

    sc().args(["--db", &db_path, "show", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("Status: Draft"))
        .stdout(contains("New Year's Day"))
        .stdout(contains("10.50"));

    sc().args(["--db", &db_path, "submit", "emp_001", "--period", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("Timesheet Submitted"))
        .stdout(contains("now Submitted"));

    sc().args([
        "--db",
        &db_path,
        "entry",
        "emp_001",
        "2026-01-07",
        "--in",
        "08:00",
        "--out",
        "12:00",
    ])
    .assert()
    .failure()
    .stderr(contains("locked"));

    sc().args(["--db", &db_path, "approve", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("Approved Period"));

    sc().args(["--db", &db_path, "show", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("Status: Approved"))
        .stdout(contains("editing disabled"))
        .stdout(contains("10.50"));

    sc().args(["--db", &db_path, "log", "--staff"])
        .assert()
        .success()
        .stdout(contains("Timesheet Submitted"))
        .stdout(contains("Approved Period").not());

    sc().args(["--db", &db_path, "log", "--admin"])
        .assert()
        .success()
        .stdout(contains("Approved Period"));

    sc().args(["--db", &db_path, "revoke", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("Revoked Approval"))
        .stdout(contains("now Draft"));
}

#[test]
fn test_approve_draft_is_rejected() {
    let db_path = setup_test_db("approve_draft");
    init_db_with_entries(&db_path);

    sc().args(["--db", &db_path, "approve", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .failure()
        .stderr(contains("Invalid transition"));

    sc().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(contains("Audit log is empty"));
}

#[test]
fn test_submit_untouched_period_fails() {
    let db_path = setup_test_db("submit_untouched");
    init_db(&db_path);

    sc().args(["--db", &db_path, "submit", "emp_002", "-p", "2026-0-1st"])
        .assert()
        .failure()
        .stderr(contains("No period 2026-0-1st"));
}

#[test]
fn test_entry_validation_errors() {
    let db_path = setup_test_db("entry_validation");
    init_db(&db_path);

    sc().args([
        "--db",
        &db_path,
        "entry",
        "emp_001",
        "2026-01-05",
        "--in",
        "17:00",
        "--out",
        "09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time"));

    sc().args(["--db", &db_path, "entry", "emp_999", "2026-01-05", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));

    sc().args(["--db", &db_path, "entry", "emp_001", "2026-01-05", "--set", "foo=bar"])
        .assert()
        .failure()
        .stderr(contains("Unknown entry field"));

    sc().args(["--db", &db_path, "entry", "emp_001", "2026-13-40", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    sc().args(["--db", &db_path, "show", "emp_001", "-p", "2026-12-1st"])
        .assert()
        .failure()
        .stderr(contains("Invalid period key"));
}

#[test]
fn test_entry_set_and_patch() {
    let db_path = setup_test_db("entry_set_patch");
    init_db(&db_path);

    sc().args([
        "--db",
        &db_path,
        "entry",
        "emp_002",
        "2026-01-20",
        "--set",
        "startTime=09:00",
        "--set",
        "endTime=17:00",
        "--set",
        "lunchBreakHours=1",
    ])
    .assert()
    .success()
    .stdout(contains("7.0h"))
    .stdout(contains("period 2026-0-2nd"));

    sc().args([
        "--db",
        &db_path,
        "entry",
        "emp_002",
        "2026-01-21",
        "--patch",
        r#"{"isSickDay": true}"#,
    ])
    .assert()
    .success()
    .stdout(contains("7.5h (sick day)"))
    .stdout(contains("total 14.5h"));
}

#[test]
fn test_export_csv_with_holidays_and_total() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db_path);

    sc().args([
        "--db",
        &db_path,
        "entry",
        "emp_001",
        "2026-02-17",
        "--in",
        "08:00",
        "--out",
        "16:00",
    ])
    .assert()
    .success();

    sc().args([
        "--db",
        &db_path,
        "export",
        "emp_001",
        "-p",
        "2026-1-2nd",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,day,holiday,start,end,lunch,total,sick,notes");
    // 16th..28th of February plus header and TOTAL
    assert_eq!(lines.len(), 13 + 2);
    assert!(content.contains("2026-02-16,Monday,Family Day"));
    assert!(content.contains("2026-02-17,Tuesday,,08:00,16:00,0.50,7.50"));
    assert!(lines.last().unwrap().starts_with("TOTAL,,,,,,7.50,0"));

    sc().args([
        "--db",
        &db_path,
        "export",
        "emp_001",
        "-p",
        "2026-1-2nd",
        "--file",
        &out,
    ])
    .assert()
    .failure();
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_entries(&db_path);

    sc().args([
        "--db",
        &db_path,
        "export",
        "emp_001",
        "-p",
        "2026-0-1st",
        "--format",
        "json",
        "--file",
        &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["employeeId"], "emp_001");
    assert_eq!(v["period"], "2026-0-1st");
    assert_eq!(v["rows"].as_array().map(Vec::len), Some(15));
}

#[test]
fn test_holidays_listing() {
    sc().args(["holidays", "2026"])
        .assert()
        .success()
        .stdout(contains("2026-04-03"))
        .stdout(contains("Good Friday"))
        .stdout(contains("2026-12-25"));
}

#[test]
fn test_deep_link() {
    let db_path = setup_test_db("deep_link");
    init_db(&db_path);

    sc().args(["--db", &db_path, "link", "emp_002", "-p", "2026-5-2nd"])
        .assert()
        .success()
        .stdout(contains("?user=emp_002&period=2026-5-2nd"));
}

#[test]
fn test_staff_lifecycle() {
    let db_path = setup_test_db("staff_lifecycle");
    init_db(&db_path);

    sc().args(["--db", &db_path, "staff", "add", "Ada Park"])
        .assert()
        .success()
        .stdout(contains("Added Ada Park as emp_004"));

    sc().args(["--db", &db_path, "staff", "deactivate", "emp_002"])
        .assert()
        .success();

    sc().args(["--db", &db_path, "staff", "list"])
        .assert()
        .success()
        .stdout(contains("Ada Park"))
        .stdout(contains("Jane Smith").not());

    sc().args(["--db", &db_path, "staff", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Jane Smith"));

    sc().args(["--db", &db_path, "log", "--admin"])
        .assert()
        .success()
        .stdout(contains("Staff Added"))
        .stdout(contains("Staff Deactivated"));
}

#[test]
fn test_review_lists_every_employee() {
    let db_path = setup_test_db("review_period");
    init_db_with_entries(&db_path);

    sc().args(["--db", &db_path, "review", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("John Doe"))
        .stdout(contains("Michael Lee"))
        .stdout(contains("10.5"));
}

#[test]
fn test_snapshot_restore() {
    let db_path = setup_test_db("snapshot_restore");
    let out = temp_out("snapshot_restore", "json");
    init_db_with_entries(&db_path);

    sc().args(["--db", &db_path, "snapshot", "--out", &out])
        .assert()
        .success();

    sc().args(["--db", &db_path, "staff", "add", "Temp Worker"])
        .assert()
        .success();

    sc().args(["--db", &db_path, "snapshot", "--restore", &out])
        .assert()
        .success()
        .stdout(contains("3 staff"));

    sc().args(["--db", &db_path, "staff", "list"])
        .assert()
        .success()
        .stdout(contains("Temp Worker").not());

    sc().args(["--db", &db_path, "show", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .success()
        .stdout(contains("10.50"));
}

#[test]
fn test_config_print() {
    sc().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database"));
}

#[test]
fn test_read_commands_do_not_create_database() {
    let db_path = setup_test_db("missing_db_read_only");

    sc().args(["--db", &db_path, "show", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .failure()
        .stderr(contains("Database error"));

    sc().args(["--db", &db_path, "staff", "list"])
        .assert()
        .failure();

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_deactivated_staff_cannot_log_or_submit() {
    let db_path = setup_test_db("deactivated_staff");
    init_db_with_entries(&db_path);

    sc().args(["--db", &db_path, "staff", "deactivate", "emp_001"])
        .assert()
        .success();

    sc().args(["--db", &db_path, "entry", "emp_001", "2026-01-07", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(contains("inactive"));

    sc().args(["--db", &db_path, "submit", "emp_001", "-p", "2026-0-1st"])
        .assert()
        .failure()
        .stderr(contains("inactive"));
}

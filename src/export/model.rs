use crate::core::aggregate::{PeriodTotals, aggregate};
use crate::core::holidays::day_rows;
use crate::models::employee::EmployeeRecord;
use crate::models::period::{PeriodData, PeriodKey, PeriodStatus};
use crate::utils::time::format_time;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of an exported timesheet. Days without an entry are still listed.
#[derive(Debug, Clone, Serialize)]
pub struct TimesheetRow {
    pub date: NaiveDate,
    pub day: &'static str,
    pub holiday: Option<&'static str>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub lunch: Option<f64>,
    pub total: f64,
    pub sick: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetExport {
    pub employee_id: String,
    pub employee_name: String,
    pub period: PeriodKey,
    pub status: PeriodStatus,
    pub rows: Vec<TimesheetRow>,
    pub totals: PeriodTotals,
}

impl TimesheetExport {
    pub fn build(emp: &EmployeeRecord, key: &PeriodKey, period: &PeriodData) -> Self {
        let rows = day_rows(key)
            .into_iter()
            .map(|day| {
                let entry = period.entry(&day.date);
                TimesheetRow {
                    date: day.date,
                    day: day.day_name,
                    holiday: day.holiday,
                    start: entry.and_then(|e| e.start_time.as_ref().map(format_time)),
                    end: entry.and_then(|e| e.end_time.as_ref().map(format_time)),
                    lunch: entry.map(|e| e.lunch_break_hours),
                    total: entry.map_or(0.0, |e| e.total_hours),
                    sick: entry.is_some_and(|e| e.is_sick_day),
                    notes: entry.map(|e| e.notes.clone()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            employee_id: emp.id.clone(),
            employee_name: emp.name.clone(),
            period: *key,
            status: period.status,
            rows,
            totals: aggregate(period),
        }
    }
}

// src/export/logic.rs

use crate::core::state::PayrollState;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::TimesheetExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::period::PeriodKey;
use std::path::Path;

/// High level export of one employee's period.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        state: &PayrollState,
        employee_id: &str,
        key: &PeriodKey,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<TimesheetExport> {
        let emp = state.employee(employee_id)?;
        let period = state.period(employee_id, key)?;

        ensure_writable(path, force)?;

        let sheet = TimesheetExport::build(emp, key, &period);
        match format {
            ExportFormat::Csv => csv::write_csv(path, &sheet)?,
            ExportFormat::Json => json::write_json(path, &sheet)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(sheet)
    }
}

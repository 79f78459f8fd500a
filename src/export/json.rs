use super::model::TimesheetExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write the timesheet as pretty JSON.
pub(crate) fn write_json(path: &Path, sheet: &TimesheetExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sheet)?;
    std::fs::write(path, json)?;
    Ok(())
}

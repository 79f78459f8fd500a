use super::model::TimesheetExport;
use crate::errors::AppResult;
use crate::utils::formatting::format_hours_precise;
use ::csv::Writer;
use std::path::Path;

/// Write the timesheet grid as CSV, one row per day plus a TOTAL row.
pub(crate) fn write_csv(path: &Path, sheet: &TimesheetExport) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "date", "day", "holiday", "start", "end", "lunch", "total", "sick", "notes",
    ])?;

    for row in &sheet.rows {
        wtr.write_record(&[
            row.date.format("%Y-%m-%d").to_string(),
            row.day.to_string(),
            row.holiday.unwrap_or("").to_string(),
            row.start.clone().unwrap_or_default(),
            row.end.clone().unwrap_or_default(),
            row.lunch.map(format_hours_precise).unwrap_or_default(),
            format_hours_precise(row.total),
            if row.sick { "yes" } else { "" }.to_string(),
            row.notes.clone(),
        ])?;
    }

    wtr.write_record(&[
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_hours_precise(sheet.totals.total_hours),
        sheet.totals.sick_day_count.to_string(),
        String::new(),
    ])?;

    wtr.flush()?;
    Ok(())
}

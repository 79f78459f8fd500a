//! Derivation of worked hours for a single day.

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::{EntryPatch, SICK_DAY_HOURS, TimeEntry};
use crate::utils::time::{format_time, minutes_between};
use chrono::NaiveDate;

/// Merge `patch` onto `existing` (or a blank day) and recompute `total_hours`.
///
/// - sick day: clock times cleared, fixed [`SICK_DAY_HOURS`]
/// - both clock times: `(end - start) / 60 - lunch`, floored at 0
/// - otherwise: 0
///
/// An end time earlier than the start time is rejected.
pub fn compute_entry(
    existing: Option<&TimeEntry>,
    date: NaiveDate,
    patch: &EntryPatch,
) -> AppResult<TimeEntry> {
    let mut entry = existing.cloned().unwrap_or_else(|| TimeEntry::blank(date));

    if let Some(start) = patch.start_time {
        entry.start_time = start;
    }
    if let Some(end) = patch.end_time {
        entry.end_time = end;
    }
    if let Some(lunch) = patch.lunch_break_hours {
        if !lunch.is_finite() || lunch < 0.0 {
            return Err(AppError::InvalidLunch(lunch.to_string()));
        }
        entry.lunch_break_hours = lunch;
    }
    if let Some(notes) = &patch.notes {
        entry.notes = notes.clone();
    }
    if let Some(sick) = patch.is_sick_day {
        entry.is_sick_day = sick;
    }

    recompute_total(&mut entry)?;
    Ok(entry)
}

/// Check a persisted entry and re-derive its total.
///
/// Used when state is read back from storage or a snapshot: a bad lunch value
/// or an inverted clock span means the stored content is corrupt.
pub fn restore_entry(entry: &mut TimeEntry) -> AppResult<()> {
    let lunch = entry.lunch_break_hours;
    if !lunch.is_finite() || lunch < 0.0 {
        return Err(AppError::CorruptState(format!(
            "entry {}: lunch break {lunch}",
            entry.date_str()
        )));
    }
    recompute_total(entry).map_err(|e| AppError::CorruptState(e.to_string()))
}

/// Re-derive `total_hours` from the other fields.
pub fn recompute_total(entry: &mut TimeEntry) -> AppResult<()> {
    if entry.is_sick_day {
        entry.start_time = None;
        entry.end_time = None;
        entry.total_hours = SICK_DAY_HOURS;
        return Ok(());
    }

    entry.total_hours = match (entry.start_time, entry.end_time) {
        (Some(start), Some(end)) => {
            let span = minutes_between(start, end);
            if span < 0 {
                return Err(AppError::InvalidTime(format!(
                    "end {} is before start {} on {}",
                    format_time(&end),
                    format_time(&start),
                    entry.date_str()
                )));
            }
            (span as f64 / 60.0 - entry.lunch_break_hours).max(0.0)
        }
        _ => 0.0,
    };

    Ok(())
}

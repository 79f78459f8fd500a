use crate::errors::{AppError, AppResult};
use crate::utils::time::{hhmm, parse_time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lunch deduction applied to a freshly created day.
pub const DEFAULT_LUNCH_HOURS: f64 = 0.5;

/// Fixed credit for a sick day, independent of clock times.
pub const SICK_DAY_HOURS: f64 = 7.5;

/// One calendar day of one employee's period.
///
/// `total_hours` is derived by [`crate::core::calculator::compute_entry`];
/// nothing else writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub date: NaiveDate,
    #[serde(with = "hhmm", default)]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "hhmm", default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default = "default_lunch")]
    pub lunch_break_hours: f64,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_sick_day: bool,
}

fn default_lunch() -> f64 {
    DEFAULT_LUNCH_HOURS
}

impl TimeEntry {
    /// Empty day: no clock times, default lunch, zero hours.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            lunch_break_hours: DEFAULT_LUNCH_HOURS,
            total_hours: 0.0,
            notes: String::new(),
            is_sick_day: false,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The fields a caller is allowed to change on a [`TimeEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    StartTime,
    EndTime,
    LunchBreakHours,
    Notes,
    IsSickDay,
}

impl EntryField {
    pub const ALL: [EntryField; 5] = [
        EntryField::StartTime,
        EntryField::EndTime,
        EntryField::LunchBreakHours,
        EntryField::Notes,
        EntryField::IsSickDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::StartTime => "startTime",
            EntryField::EndTime => "endTime",
            EntryField::LunchBreakHours => "lunchBreakHours",
            EntryField::Notes => "notes",
            EntryField::IsSickDay => "isSickDay",
        }
    }
}

impl FromStr for EntryField {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        EntryField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

/// Typed partial update of a [`TimeEntry`].
///
/// `None` leaves a field untouched. For clock times `Some(None)` clears the value.
/// `date` and `totalHours` are not patchable; JSON patches naming them, or any
/// other unknown key, are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntryPatch {
    #[serde(default, deserialize_with = "hhmm::deserialize_patch")]
    pub start_time: Option<Option<NaiveTime>>,
    #[serde(default, deserialize_with = "hhmm::deserialize_patch")]
    pub end_time: Option<Option<NaiveTime>>,
    #[serde(default)]
    pub lunch_break_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_sick_day: Option<bool>,
}

impl EntryPatch {
    /// Parse a JSON object patch. Keys are checked against [`EntryField`] first,
    /// so a foreign key is always reported as `UnknownField`.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if let Some(fields) = value.as_object() {
            for name in fields.keys() {
                name.parse::<EntryField>()?;
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Set one field from its textual form (`field=value` on the command line).
    pub fn set(&mut self, field: &str, value: &str) -> AppResult<()> {
        match field.parse::<EntryField>()? {
            EntryField::StartTime => self.start_time = Some(parse_clock(value)?),
            EntryField::EndTime => self.end_time = Some(parse_clock(value)?),
            EntryField::LunchBreakHours => {
                let hours = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| AppError::InvalidLunch(value.to_string()))?;
                self.lunch_break_hours = Some(hours);
            }
            EntryField::Notes => self.notes = Some(value.to_string()),
            EntryField::IsSickDay => {
                let flag = value
                    .trim()
                    .parse::<bool>()
                    .map_err(|_| AppError::Other(format!("isSickDay expects true/false, got '{value}'")))?;
                self.is_sick_day = Some(flag);
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }

    /// Fields of `other` override the ones already set here.
    pub fn merge(mut self, other: EntryPatch) -> Self {
        if other.start_time.is_some() {
            self.start_time = other.start_time;
        }
        if other.end_time.is_some() {
            self.end_time = other.end_time;
        }
        if other.lunch_break_hours.is_some() {
            self.lunch_break_hours = other.lunch_break_hours;
        }
        if other.notes.is_some() {
            self.notes = other.notes;
        }
        if other.is_sick_day.is_some() {
            self.is_sick_day = other.is_sick_day;
        }
        self
    }
}

/// Empty string clears the clock value.
fn parse_clock(value: &str) -> AppResult<Option<NaiveTime>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_time(value)
        .map(Some)
        .ok_or_else(|| AppError::InvalidTime(value.to_string()))
}

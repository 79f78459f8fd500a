use super::time_entry::TimeEntry;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{all_days_between, days_in_month};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Lifecycle state of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
}

impl PeriodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodStatus::Draft => "Draft",
            PeriodStatus::Submitted => "Submitted",
            PeriodStatus::Approved => "Approved",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(PeriodStatus::Draft),
            "Submitted" => Some(PeriodStatus::Submitted),
            "Approved" => Some(PeriodStatus::Approved),
            _ => None,
        }
    }

    /// Entries are frozen in every state but Draft.
    pub fn is_locked(&self) -> bool {
        !matches!(self, PeriodStatus::Draft)
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of the month a period covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PayHalf {
    /// Days 1..=15.
    First,
    /// Day 16 through the last day of the month.
    Second,
}

impl PayHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayHalf::First => "1st",
            PayHalf::Second => "2nd",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "1st" => Some(PayHalf::First),
            "2nd" => Some(PayHalf::Second),
            _ => None,
        }
    }
}

/// Identity of a half-month period: `{year}-{monthIndex}-{half}`, month 0-based.
///
/// Deep links generated by collaborators must use the exact same textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PeriodKey {
    pub year: i32,
    /// 0 = January.
    pub month: u32,
    pub half: PayHalf,
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?\d{1,6})-(\d{1,2})-(1st|2nd)$").expect("static regex"))
}

impl PeriodKey {
    pub fn new(year: i32, month: u32, half: PayHalf) -> AppResult<Self> {
        let key = Self { year, month, half };
        if month > 11 || NaiveDate::from_ymd_opt(year, month + 1, 1).is_none() {
            return Err(AppError::InvalidPeriod(key.to_string()));
        }
        Ok(key)
    }

    /// The period a calendar date belongs to.
    pub fn containing(date: NaiveDate) -> Self {
        let half = if date.day() <= 15 {
            PayHalf::First
        } else {
            PayHalf::Second
        };
        Self {
            year: date.year(),
            month: date.month0(),
            half,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        let day = match self.half {
            PayHalf::First => 1,
            PayHalf::Second => 16,
        };
        // Validated in `new` / `containing`.
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let day = match self.half {
            PayHalf::First => 15,
            PayHalf::Second => days_in_month(self.year, self.month + 1).unwrap_or(28),
        };
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        PeriodKey::containing(date) == *self
    }

    /// Every calendar day of the half, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        all_days_between(self.first_day(), self.last_day())
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.half.as_str())
    }
}

impl FromStr for PeriodKey {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let caps = key_regex()
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidPeriod(s.to_string()))?;

        let year = caps[1]
            .parse::<i32>()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
        let month = caps[2]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidPeriod(s.to_string()))?;
        let half = PayHalf::from_code(&caps[3]).ok_or_else(|| AppError::InvalidPeriod(s.to_string()))?;

        PeriodKey::new(year, month, half)
    }
}

impl From<PeriodKey> for String {
    fn from(key: PeriodKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for PeriodKey {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.parse()
    }
}

/// One half-month of one employee.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodData {
    pub status: PeriodStatus,
    pub entries: BTreeMap<NaiveDate, TimeEntry>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PeriodData {
    pub fn entry(&self, date: &NaiveDate) -> Option<&TimeEntry> {
        self.entries.get(date)
    }
}

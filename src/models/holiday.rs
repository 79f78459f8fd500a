use chrono::NaiveDate;
use serde::Serialize;

/// A statutory holiday. Generated per year, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &'static str) -> Self {
        Self { date, name }
    }
}

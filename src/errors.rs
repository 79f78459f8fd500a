//! Unified application error type.
//! Engine, persistence and CLI layers all return AppError so every failure
//! reaches the caller as an explicit outcome.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt stored state: {0}")]
    CorruptState(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid lunch break: {0}")]
    InvalidLunch(String),

    #[error("Invalid period key: {0} (expected YYYY-M-1st|2nd, month 0-based)")]
    InvalidPeriod(String),

    #[error("Unknown entry field: {0}")]
    UnknownField(String),

    // ---------------------------
    // Workflow errors
    // ---------------------------
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Period {key} is {status}: entries are locked")]
    PeriodLocked { key: String, status: String },

    #[error("Date {date} is outside period {key}")]
    DateOutsidePeriod { date: String, key: String },

    #[error("{actor} may not perform '{action}'")]
    NotPermitted { actor: String, action: String },

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("No period {key} for employee {employee}")]
    PeriodNotFound { employee: String, key: String },

    #[error("Employee {0} is inactive")]
    EmployeeInactive(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

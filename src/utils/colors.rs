/// ANSI color helper utilities for terminal output.
use crate::models::period::PeriodStatus;

pub const RESET: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Draft is plain, Submitted amber, Approved green.
pub fn color_for_status(status: PeriodStatus) -> &'static str {
    match status {
        PeriodStatus::Draft => RESET,
        PeriodStatus::Submitted => YELLOW,
        PeriodStatus::Approved => GREEN,
    }
}

/// Status label, colored unless `NO_COLOR` is set.
pub fn paint_status(status: PeriodStatus) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        status.to_string()
    } else {
        format!("{}{}{}", color_for_status(status), status, RESET)
    }
}

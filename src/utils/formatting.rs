//! Formatting utilities used for CLI and export outputs.

/// Hours with one decimal, as shown on the timesheet grid.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Hours with two decimals for exports and totals.
pub fn format_hours_precise(hours: f64) -> String {
    format!("{:.2}", hours)
}

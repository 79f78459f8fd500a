//! Period workflow and hours computation engine.

pub mod aggregate;
pub mod audit;
pub mod calculator;
pub mod config;
pub mod holidays;
pub mod log;
pub mod state;
pub mod workflow;

pub use aggregate::{PeriodTotals, aggregate};
pub use calculator::compute_entry;
pub use holidays::compute_holidays;
pub use state::PayrollState;

pub mod actor;
pub mod employee;
pub mod holiday;
pub mod log_entry;
pub mod period;
pub mod time_entry;

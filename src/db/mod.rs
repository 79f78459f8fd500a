//! SQLite persistence for the payroll state.

pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod snapshot;
pub mod store;

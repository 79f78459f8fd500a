//! JSON snapshot of the full state (`{employees, auditLog}`).

use crate::core::audit::AuditLog;
use crate::core::calculator::restore_entry;
use crate::core::state::PayrollState;
use crate::errors::{AppError, AppResult};
use crate::models::employee::EmployeeRecord;
use crate::models::log_entry::AuditLogEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub employees: BTreeMap<String, EmployeeRecord>,
    #[serde(default)]
    pub audit_log: Vec<AuditLogEntry>,
}

impl Snapshot {
    pub fn from_state(state: &PayrollState) -> Self {
        Self {
            employees: state.employees.clone(),
            audit_log: state.audit.to_vec(),
        }
    }

    /// Validate and turn into a state. Entry totals are re-derived.
    pub fn into_state(mut self, audit_capacity: usize) -> AppResult<PayrollState> {
        for (id, emp) in self.employees.iter_mut() {
            if *id != emp.id {
                return Err(AppError::CorruptState(format!(
                    "employee key '{id}' does not match id '{}'",
                    emp.id
                )));
            }
            for (key, period) in emp.periods.iter_mut() {
                for (date, entry) in period.entries.iter_mut() {
                    if *date != entry.date || !key.contains(*date) {
                        return Err(AppError::CorruptState(format!(
                            "entry {date} does not belong to period {key}"
                        )));
                    }
                    restore_entry(entry)?;
                }
            }
        }

        Ok(PayrollState::new(
            self.employees,
            AuditLog::from_entries(self.audit_log, audit_capacity),
        ))
    }

    pub fn write(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn read(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

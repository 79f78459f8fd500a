use super::period::{PeriodData, PeriodKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One staff member and their timesheet history.
///
/// Never physically deleted: deactivation hides the employee from submission
/// flows and is reversible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub periods: BTreeMap<PeriodKey, PeriodData>,
}

impl EmployeeRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active: true,
            periods: BTreeMap::new(),
        }
    }

    /// Numeric suffix of ids shaped like `emp_007`.
    pub fn id_number(&self) -> Option<u32> {
        self.id.strip_prefix("emp_")?.parse().ok()
    }
}

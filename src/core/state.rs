//! The explicit payroll state object: roster plus audit log.
//!
//! Every operation validates first and mutates last, so a failed call leaves
//! the state exactly as it was.

use crate::core::audit::AuditLog;
use crate::core::calculator::compute_entry;
use crate::core::workflow::{Transition, apply_transition, ensure_editable};
use crate::errors::{AppError, AppResult};
use crate::models::actor::{Actor, ActorType};
use crate::models::employee::EmployeeRecord;
use crate::models::log_entry::AuditLogEntry;
use crate::models::period::{PeriodData, PeriodKey, PeriodStatus};
use crate::models::time_entry::{EntryPatch, TimeEntry};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// Initial roster entry used when no state has been stored yet.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeedEmployee {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayrollState {
    pub employees: BTreeMap<String, EmployeeRecord>,
    pub audit: AuditLog,
}

impl PayrollState {
    pub fn new(employees: BTreeMap<String, EmployeeRecord>, audit: AuditLog) -> Self {
        Self { employees, audit }
    }

    pub fn seeded(roster: &[SeedEmployee], audit_capacity: usize) -> Self {
        let employees = roster
            .iter()
            .map(|s| (s.id.clone(), EmployeeRecord::new(&s.id, &s.name)))
            .collect();
        Self::new(employees, AuditLog::with_capacity(audit_capacity))
    }

    // ------------------------------------------------
    // Roster
    // ------------------------------------------------

    pub fn employee(&self, id: &str) -> AppResult<&EmployeeRecord> {
        self.employees
            .get(id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))
    }

    fn employee_mut(&mut self, id: &str) -> AppResult<&mut EmployeeRecord> {
        self.employees
            .get_mut(id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))
    }

    /// Active staff, sorted by name.
    pub fn active_employees(&self) -> Vec<&EmployeeRecord> {
        let mut out: Vec<_> = self.employees.values().filter(|e| e.is_active).collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Everyone, active first, then by name.
    pub fn roster(&self) -> Vec<&EmployeeRecord> {
        let mut out: Vec<_> = self.employees.values().collect();
        out.sort_by(|a, b| b.is_active.cmp(&a.is_active).then_with(|| a.name.cmp(&b.name)));
        out
    }

    pub fn add_employee(&mut self, actor: &Actor, name: &str) -> AppResult<&EmployeeRecord> {
        require_admin(actor, "Staff Added")?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("Employee name cannot be empty.".into()));
        }

        let next = self
            .employees
            .values()
            .filter_map(EmployeeRecord::id_number)
            .max()
            .unwrap_or(0)
            + 1;
        let id = format!("emp_{next:03}");

        self.audit.record(
            ActorType::Admin,
            "System",
            "Staff Added",
            &format!("New employee: {name}"),
        );
        tracing::info!(%id, name, "employee added");

        let emp = self
            .employees
            .entry(id.clone())
            .or_insert_with(|| EmployeeRecord::new(id, name));
        Ok(&*emp)
    }

    /// Soft-disable or restore an employee. History is always retained.
    pub fn set_active(&mut self, actor: &Actor, id: &str, active: bool) -> AppResult<()> {
        let action = if active {
            "Staff Restored"
        } else {
            "Staff Deactivated"
        };
        require_admin(actor, action)?;

        let emp = self.employee_mut(id)?;
        emp.is_active = active;
        let name = emp.name.clone();

        let status = if active { "Active" } else { "Inactive" };
        self.audit
            .record(ActorType::Admin, &name, action, &format!("Status: {status}"));
        Ok(())
    }

    // ------------------------------------------------
    // Periods
    // ------------------------------------------------

    /// The stored period, or an empty Draft view when nothing was recorded yet.
    pub fn period(&self, id: &str, key: &PeriodKey) -> AppResult<PeriodData> {
        let emp = self.employee(id)?;
        Ok(emp.periods.get(key).cloned().unwrap_or_default())
    }

    /// The stored period; absent periods are a not-found outcome.
    pub fn stored_period(&self, id: &str, key: &PeriodKey) -> AppResult<&PeriodData> {
        let emp = self.employee(id)?;
        emp.periods.get(key).ok_or_else(|| AppError::PeriodNotFound {
            employee: id.to_string(),
            key: key.to_string(),
        })
    }

    /// Apply `patch` to one day. Creates the period in Draft on first edit.
    /// Staff edits on a deactivated employee are rejected; admins may still correct them.
    pub fn update_entry(
        &mut self,
        actor: &Actor,
        id: &str,
        key: &PeriodKey,
        date: NaiveDate,
        patch: &EntryPatch,
    ) -> AppResult<TimeEntry> {
        if !(actor.owns(id) || actor.is_admin()) {
            return Err(AppError::NotPermitted {
                actor: actor.to_string(),
                action: "Edit Entry".to_string(),
            });
        }

        if !key.contains(date) {
            return Err(AppError::DateOutsidePeriod {
                date: date.to_string(),
                key: key.to_string(),
            });
        }

        let emp = self.employee_mut(id)?;
        if !emp.is_active && !actor.is_admin() {
            return Err(AppError::EmployeeInactive(id.to_string()));
        }

        let existing = emp.periods.get(key);
        if let Some(period) = existing {
            ensure_editable(key, period)?;
        }

        let entry = compute_entry(existing.and_then(|p| p.entry(&date)), date, patch)?;

        let period = emp.periods.entry(*key).or_default();
        period.entries.insert(date, entry.clone());
        period.last_updated = Some(Utc::now());

        tracing::debug!(employee = id, period = %key, %date, hours = entry.total_hours, "entry updated");
        Ok(entry)
    }

    /// Request a status change. The transition must exist in the workflow table
    /// and be triggered by the expected actor.
    pub fn transition(
        &mut self,
        actor: &Actor,
        id: &str,
        key: &PeriodKey,
        to: PeriodStatus,
    ) -> AppResult<AuditLogEntry> {
        let current = self.stored_period(id, key)?.status;
        let transition = Transition::between(current, to)?;
        self.apply(actor, id, key, transition)
    }

    pub fn submit(&mut self, actor: &Actor, id: &str, key: &PeriodKey) -> AppResult<AuditLogEntry> {
        self.apply(actor, id, key, Transition::Submit)
    }

    pub fn approve(&mut self, actor: &Actor, id: &str, key: &PeriodKey) -> AppResult<AuditLogEntry> {
        self.apply(actor, id, key, Transition::Approve)
    }

    pub fn return_to_draft(
        &mut self,
        actor: &Actor,
        id: &str,
        key: &PeriodKey,
    ) -> AppResult<AuditLogEntry> {
        self.apply(actor, id, key, Transition::Return)
    }

    pub fn revoke(&mut self, actor: &Actor, id: &str, key: &PeriodKey) -> AppResult<AuditLogEntry> {
        self.apply(actor, id, key, Transition::Revoke)
    }

    fn apply(
        &mut self,
        actor: &Actor,
        id: &str,
        key: &PeriodKey,
        transition: Transition,
    ) -> AppResult<AuditLogEntry> {
        transition.authorize(actor, id)?;

        let emp = self.employee_mut(id)?;
        // inactive staff are out of the submission flow; review stays possible
        if transition == Transition::Submit && !emp.is_active {
            return Err(AppError::EmployeeInactive(id.to_string()));
        }
        let period = emp.periods.get_mut(key).ok_or_else(|| AppError::PeriodNotFound {
            employee: id.to_string(),
            key: key.to_string(),
        })?;

        apply_transition(period, transition, Utc::now())?;
        let name = emp.name.clone();

        tracing::info!(employee = id, period = %key, %transition, "period transition");
        Ok(self.audit.record(
            transition.actor_type(),
            &name,
            transition.audit_action(),
            &format!("Period: {key}"),
        ))
    }
}

fn require_admin(actor: &Actor, action: &str) -> AppResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::NotPermitted {
            actor: actor.to_string(),
            action: action.to_string(),
        })
    }
}

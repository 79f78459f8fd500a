//! Period lifecycle: Draft -> Submitted -> Approved, with returns to Draft.

use crate::errors::{AppError, AppResult};
use crate::models::actor::{Actor, ActorType};
use crate::models::period::{PeriodData, PeriodKey, PeriodStatus};
use chrono::{DateTime, Utc};
use std::fmt;

/// Every legal status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Draft -> Submitted, by the owning staff member.
    Submit,
    /// Submitted -> Approved, by a reviewer.
    Approve,
    /// Submitted -> Draft, by a reviewer.
    Return,
    /// Approved -> Draft, by a reviewer.
    Revoke,
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::Submit,
        Transition::Approve,
        Transition::Return,
        Transition::Revoke,
    ];

    pub fn from_status(&self) -> PeriodStatus {
        match self {
            Transition::Submit => PeriodStatus::Draft,
            Transition::Approve | Transition::Return => PeriodStatus::Submitted,
            Transition::Revoke => PeriodStatus::Approved,
        }
    }

    pub fn to_status(&self) -> PeriodStatus {
        match self {
            Transition::Submit => PeriodStatus::Submitted,
            Transition::Approve => PeriodStatus::Approved,
            Transition::Return | Transition::Revoke => PeriodStatus::Draft,
        }
    }

    /// Label recorded in the audit log; distinct per transition.
    pub fn audit_action(&self) -> &'static str {
        match self {
            Transition::Submit => "Timesheet Submitted",
            Transition::Approve => "Approved Period",
            Transition::Return => "Rejected to Draft",
            Transition::Revoke => "Revoked Approval",
        }
    }

    /// Who is expected to trigger this transition.
    pub fn actor_type(&self) -> ActorType {
        match self {
            Transition::Submit => ActorType::Staff,
            _ => ActorType::Admin,
        }
    }

    /// The transition for a requested status change, if the table has one.
    pub fn between(from: PeriodStatus, to: PeriodStatus) -> AppResult<Self> {
        Transition::ALL
            .into_iter()
            .find(|t| t.from_status() == from && t.to_status() == to)
            .ok_or_else(|| AppError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Staff may only submit their own period; everything else needs a reviewer.
    pub fn authorize(&self, actor: &Actor, employee_id: &str) -> AppResult<()> {
        let allowed = match self {
            Transition::Submit => actor.owns(employee_id),
            _ => actor.is_admin(),
        };

        if allowed {
            Ok(())
        } else {
            Err(AppError::NotPermitted {
                actor: actor.to_string(),
                action: self.audit_action().to_string(),
            })
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_status(), self.to_status())
    }
}

/// Move `period` along `transition`, stamping `last_updated`.
/// Fails without touching the period when the current status does not match.
pub fn apply_transition(
    period: &mut PeriodData,
    transition: Transition,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if period.status != transition.from_status() {
        return Err(AppError::InvalidTransition {
            from: period.status.to_string(),
            to: transition.to_status().to_string(),
        });
    }

    period.status = transition.to_status();
    period.last_updated = Some(now);
    Ok(())
}

pub fn ensure_editable(key: &PeriodKey, period: &PeriodData) -> AppResult<()> {
    if period.status.is_locked() {
        return Err(AppError::PeriodLocked {
            key: key.to_string(),
            status: period.status.to_string(),
        });
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audit category of whoever triggered an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Staff,
    Admin,
}

impl ActorType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActorType::Staff => "staff",
            ActorType::Admin => "admin",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "staff" | "staff_action" => Some(ActorType::Staff),
            "admin" | "admin_action" => Some(ActorType::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// The calling context handed to the engine by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// A staff member acting on their own timesheet.
    Staff { employee_id: String },
    /// A reviewer / payroll administrator.
    Admin,
}

impl Actor {
    pub fn staff(employee_id: impl Into<String>) -> Self {
        Actor::Staff {
            employee_id: employee_id.into(),
        }
    }

    pub fn actor_type(&self) -> ActorType {
        match self {
            Actor::Staff { .. } => ActorType::Staff,
            Actor::Admin => ActorType::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::Admin)
    }

    /// True for the staff member owning `employee_id`.
    pub fn owns(&self, employee_id: &str) -> bool {
        matches!(self, Actor::Staff { employee_id: id } if id == employee_id)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Staff { employee_id } => write!(f, "staff {employee_id}"),
            Actor::Admin => f.write_str("admin"),
        }
    }
}

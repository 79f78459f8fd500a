use super::actor::ActorType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of a workflow or roster action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub actor_type: ActorType,
    pub subject_name: String,
    pub action: String,
    pub details: String,
}

impl AuditLogEntry {
    /// Sequence number embedded in ids of the form `log_<millis>_<seq>`.
    pub fn sequence(&self) -> Option<u64> {
        self.id.rsplit('_').next()?.parse().ok()
    }
}

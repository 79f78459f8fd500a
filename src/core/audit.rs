//! Bounded, append-only audit log (newest first).

use crate::models::actor::ActorType;
use crate::models::log_entry::AuditLogEntry;
use chrono::Utc;
use std::collections::VecDeque;

pub const DEFAULT_AUDIT_CAPACITY: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    entries: VecDeque<AuditLogEntry>,
    capacity: usize,
    next_seq: u64,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_AUDIT_CAPACITY)
    }
}

impl AuditLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            next_seq: 1,
        }
    }

    /// Rebuild from stored entries (newest first). Over-capacity tails are dropped
    /// and the id sequence resumes after the highest stored one.
    pub fn from_entries(entries: Vec<AuditLogEntry>, capacity: usize) -> Self {
        let mut log = Self::with_capacity(capacity);
        log.next_seq = entries
            .iter()
            .filter_map(AuditLogEntry::sequence)
            .max()
            .map_or(1, |s| s + 1);
        log.entries = entries.into();
        log.entries.truncate(log.capacity);
        log
    }

    /// Append a new fact at the front, evicting the oldest beyond capacity.
    pub fn record(
        &mut self,
        actor_type: ActorType,
        subject_name: &str,
        action: &str,
        details: &str,
    ) -> AuditLogEntry {
        let now = Utc::now();
        let entry = AuditLogEntry {
            id: format!("log_{}_{}", now.timestamp_millis(), self.next_seq),
            timestamp: now,
            actor_type,
            subject_name: subject_name.to_string(),
            action: action.to_string(),
            details: details.to_string(),
        };
        self.next_seq += 1;

        self.entries.push_front(entry.clone());
        self.entries.truncate(self.capacity);

        tracing::debug!(id = %entry.id, actor = %actor_type, action, "audit entry recorded");
        entry
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuditLogEntry> {
        self.entries.iter()
    }

    pub fn by_actor(&self, actor_type: ActorType) -> impl Iterator<Item = &AuditLogEntry> {
        self.entries.iter().filter(move |e| e.actor_type == actor_type)
    }

    pub fn latest(&self) -> Option<&AuditLogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<AuditLogEntry> {
        self.entries.iter().cloned().collect()
    }
}

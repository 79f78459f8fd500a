use crate::core::audit::AuditLog;
use crate::models::actor::ActorType;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour of the action label.
fn color_for_action(actor: ActorType, action: &str) -> Colour {
    match (actor, action) {
        (_, "Approved Period") => Colour::Green,
        (_, "Rejected to Draft") | (_, "Revoked Approval") => Colour::Red,
        (_, "Staff Deactivated") => Colour::Red,
        (_, "Staff Added") | (_, "Staff Restored") => Colour::Purple,
        (ActorType::Staff, _) => Colour::Yellow,
        (ActorType::Admin, _) => Colour::Blue,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render audit entries (newest first), optionally only one actor type.
    pub fn render(log: &AuditLog, filter: Option<ActorType>) -> Vec<String> {
        let entries: Vec<_> = match filter {
            Some(actor) => log.by_actor(actor).collect(),
            None => log.iter().collect(),
        };

        let label_w = entries
            .iter()
            .map(|e| e.action.len() + e.subject_name.len() + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        entries
            .iter()
            .map(|e| {
                let color = color_for_action(e.actor_type, &e.action);
                let label = format!("{} ({})", color.paint(e.action.as_str()), e.subject_name);
                let padding = " ".repeat(label_w.saturating_sub(strip_ansi(&label).len()));

                format!(
                    "{} | {:<5} | {}{} => {}",
                    e.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    e.actor_type.to_db_str(),
                    label,
                    padding,
                    e.details
                )
            })
            .collect()
    }

    pub fn print_log(log: &AuditLog, filter: Option<ActorType>) {
        let lines = Self::render(log, filter);
        if lines.is_empty() {
            info("Audit log is empty.");
            return;
        }

        println!("📜 Audit log ({} of max {}):\n", lines.len(), log.capacity());
        for l in lines {
            println!("{l}");
        }
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::db::pool::DbPool;
use crate::db::store::mutate;
use crate::errors::{AppError, AppResult};
use crate::models::actor::Actor;
use crate::models::period::PeriodKey;
use crate::models::time_entry::{EntryField, EntryPatch};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_hours;

/// Log or change one day. Acts as the owning staff member.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entry {
        employee,
        date,
        start,
        end,
        lunch,
        notes,
        sick,
        not_sick,
        set,
        patch,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let key = PeriodKey::containing(d);

        let mut flags = EntryPatch::default();
        if let Some(s) = start {
            flags.set(EntryField::StartTime.as_str(), s)?;
        }
        if let Some(e) = end {
            flags.set(EntryField::EndTime.as_str(), e)?;
        }
        flags.lunch_break_hours = *lunch;
        flags.notes = notes.clone();
        if *sick {
            flags.is_sick_day = Some(true);
        } else if *not_sick {
            flags.is_sick_day = Some(false);
        }

        for item in set {
            let (field, value) = item
                .split_once('=')
                .ok_or_else(|| AppError::UnknownField(item.clone()))?;
            flags.set(field.trim(), value)?;
        }

        let merged = match patch {
            Some(json) => EntryPatch::from_json(json)?.merge(flags),
            None => flags,
        };

        if merged.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify --in, --out, --lunch, --notes, --sick or --set.".into(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let actor = Actor::staff(employee);
        let (entry, period_total) = mutate(&mut pool, cfg, |state| {
            let entry = state.update_entry(&actor, employee, &key, d, &merged)?;
            let totals = aggregate(&state.period(employee, &key)?);
            Ok((entry, totals.total_hours))
        })?;

        let kind = if entry.is_sick_day { " (sick day)" } else { "" };
        success(format!(
            "Saved {} for {}: {}h{}; period {} total {}h.",
            entry.date_str(),
            employee,
            format_hours(entry.total_hours),
            kind,
            key,
            format_hours(period_total)
        ));
    }
    Ok(())
}

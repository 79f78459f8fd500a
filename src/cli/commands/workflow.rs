use super::parse_key;
use crate::cli::parser::{Commands, PeriodArgs};
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::core::workflow::Transition;
use crate::db::pool::DbPool;
use crate::db::store::mutate;
use crate::errors::AppResult;
use crate::models::actor::Actor;
use crate::ui::messages::success;
use crate::utils::formatting::format_hours;

/// Submit / approve / return / revoke.
///
/// `submit` acts as the owning staff member, the others as a reviewer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (target, transition): (&PeriodArgs, Transition) = match cmd {
        Commands::Submit { target } => (target, Transition::Submit),
        Commands::Approve { target } => (target, Transition::Approve),
        Commands::Return { target } => (target, Transition::Return),
        Commands::Revoke { target } => (target, Transition::Revoke),
        _ => return Ok(()),
    };

    let key = parse_key(&target.period)?;
    let id = target.employee.as_str();
    let actor = match transition {
        Transition::Submit => Actor::staff(id),
        _ => Actor::Admin,
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let (logged, hours) = mutate(&mut pool, cfg, |state| {
        let logged = match transition {
            Transition::Submit => state.submit(&actor, id, &key)?,
            Transition::Approve => state.approve(&actor, id, &key)?,
            Transition::Return => state.return_to_draft(&actor, id, &key)?,
            Transition::Revoke => state.revoke(&actor, id, &key)?,
        };
        let hours = aggregate(state.stored_period(id, &key)?).total_hours;
        Ok((logged, hours))
    })?;

    success(format!(
        "{}: {} · {} ({}h) · now {}.",
        logged.action,
        logged.subject_name,
        key,
        format_hours(hours),
        transition.to_status()
    ));
    Ok(())
}

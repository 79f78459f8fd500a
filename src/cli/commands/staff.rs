use crate::cli::parser::{Commands, StaffAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::{mutate, read_state};
use crate::errors::AppResult;
use crate::models::actor::Actor;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Staff { action } = cmd else {
        return Ok(());
    };

    match action {
        StaffAction::Add { name } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let (id, name) = mutate(&mut pool, cfg, |state| {
                let emp = state.add_employee(&Actor::Admin, name)?;
                Ok((emp.id.clone(), emp.name.clone()))
            })?;
            success(format!("Added {name} as {id}."));
        }
        StaffAction::List { all } => {
            let pool = DbPool::open_read_only(&cfg.database)?;
            let state = read_state(&pool, cfg)?;
            let list = if *all {
                state.roster()
            } else {
                state.active_employees()
            };

            if list.is_empty() {
                info("No staff found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("ID", 10),
                Column::left("NAME", 24),
                Column::left("ACTIVE", 6),
                Column::right("PERIODS", 7),
            ]);
            for emp in list {
                table.add_row(vec![
                    emp.id.clone(),
                    emp.name.clone(),
                    if emp.is_active { "yes" } else { "no" }.to_string(),
                    emp.periods.len().to_string(),
                ]);
            }
            print!("{}", table.render());
        }
        StaffAction::Deactivate { employee } => {
            let mut pool = DbPool::new(&cfg.database)?;
            mutate(&mut pool, cfg, |state| {
                state.set_active(&Actor::Admin, employee, false)
            })?;
            success(format!("{employee} deactivated (history retained)."));
        }
        StaffAction::Restore { employee } => {
            let mut pool = DbPool::new(&cfg.database)?;
            mutate(&mut pool, cfg, |state| {
                state.set_active(&Actor::Admin, employee, true)
            })?;
            success(format!("{employee} restored."));
        }
    }

    Ok(())
}

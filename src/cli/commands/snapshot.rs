use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::snapshot::Snapshot;
use crate::db::store::{mutate, read_state};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Snapshot { out, restore } = cmd else {
        return Ok(());
    };

    match (out, restore) {
        (Some(file), None) => {
            let path = expand_tilde(file);
            let pool = DbPool::open_read_only(&cfg.database)?;
            let state = read_state(&pool, cfg)?;
            Snapshot::from_state(&state).write(&path)?;
            success(format!("Snapshot written to {}", path.display()));
        }
        (None, Some(file)) => {
            let path = expand_tilde(file);
            // parse fully before touching the database
            let restored = Snapshot::read(&path)?.into_state(cfg.audit_log_capacity)?;
            let staff = restored.employees.len();
            let mut pool = DbPool::new(&cfg.database)?;
            mutate(&mut pool, cfg, move |state| {
                *state = restored;
                Ok(())
            })?;
            success(format!(
                "State restored from {} ({} staff).",
                path.display(),
                staff
            ));
        }
        _ => {
            return Err(AppError::Other(
                "Specify exactly one of --out or --restore.".into(),
            ));
        }
    }

    Ok(())
}

use super::parse_key;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::read_state;
use crate::errors::AppResult;
use crate::models::period::PeriodKey;

/// Query string addressing one employee's period, e.g. `?user=emp_001&period=2026-0-1st`.
pub fn deep_link(employee_id: &str, key: &PeriodKey) -> String {
    format!("?user={employee_id}&period={key}")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Link { target } = cmd else {
        return Ok(());
    };

    let key = parse_key(&target.period)?;
    let pool = DbPool::open_read_only(&cfg.database)?;
    let state = read_state(&pool, cfg)?;
    let emp = state.employee(&target.employee)?;

    println!("{}", deep_link(&emp.id, &key));
    Ok(())
}

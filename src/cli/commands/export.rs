use super::parse_key;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::read_state;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        target,
        format,
        file,
        force,
    } = cmd
    {
        let key = parse_key(&target.period)?;
        let pool = DbPool::open_read_only(&cfg.database)?;
        let state = read_state(&pool, cfg)?;

        ExportLogic::export(
            &state,
            &target.employee,
            &key,
            *format,
            &expand_tilde(file),
            *force,
        )?;
    }
    Ok(())
}

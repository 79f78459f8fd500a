use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::db::store::read_state;
use crate::errors::AppResult;
use crate::models::actor::ActorType;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { staff, admin } = cmd {
        let filter = match (staff, admin) {
            (true, _) => Some(ActorType::Staff),
            (_, true) => Some(ActorType::Admin),
            _ => None,
        };

        let pool = DbPool::open_read_only(&cfg.database)?;
        let state = read_state(&pool, cfg)?;
        LogLogic::print_log(&state.audit, filter);
    }

    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::mutate;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
///  - the seed roster, when the database is empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing scpayroll…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;
    let staff = mutate(&mut pool, &cfg, |state| Ok(state.employees.len()))?;

    println!("✅ Database initialized at {} ({} staff)", &cfg.database, staff);
    println!("🎉 scpayroll initialization completed!");
    Ok(())
}

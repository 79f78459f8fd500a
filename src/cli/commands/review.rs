use super::parse_key;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::db::pool::DbPool;
use crate::db::store::read_state;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};

/// Admin overview: every employee's status and hours for one period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Review { period } = cmd else {
        return Ok(());
    };

    let key = parse_key(period)?;
    let pool = DbPool::open_read_only(&cfg.database)?;
    let state = read_state(&pool, cfg)?;

    header(format!("Review · period {key}"));

    let mut table = Table::new(vec![
        Column::left("ID", 10),
        Column::left("NAME", 24),
        Column::left("ACTIVE", 6),
        Column::left("STATUS", 9),
        Column::right("HOURS", 6),
        Column::right("SICK", 4),
        Column::left("UPDATED", 16),
    ]);

    for emp in state.roster() {
        let period = emp.periods.get(&key).cloned().unwrap_or_default();
        let totals = aggregate(&period);
        table.add_row(vec![
            emp.id.clone(),
            emp.name.clone(),
            if emp.is_active { "yes" } else { "no" }.to_string(),
            period.status.to_string(),
            format_hours(totals.total_hours),
            totals.sick_day_count.to_string(),
            period
                .last_updated
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

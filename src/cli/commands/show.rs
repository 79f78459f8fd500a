use super::parse_key;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::aggregate;
use crate::core::holidays::day_rows;
use crate::db::pool::DbPool;
use crate::db::store::read_state;
use crate::errors::AppResult;
use crate::ui::messages::{header, locked};
use crate::utils::colors::paint_status;
use crate::utils::date::MONTHS;
use crate::utils::formatting::{format_hours, format_hours_precise};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Show { target } = cmd else {
        return Ok(());
    };

    let key = parse_key(&target.period)?;
    let pool = DbPool::open_read_only(&cfg.database)?;
    let state = read_state(&pool, cfg)?;

    let emp = state.employee(&target.employee)?;
    let period = state.period(&target.employee, &key)?;

    header(format!(
        "{} · {} {} ({} half) · {}",
        emp.name,
        MONTHS[key.month as usize],
        key.year,
        key.half.as_str(),
        key
    ));

    println!("Status: {}", paint_status(period.status));
    if let Some(ts) = period.last_updated {
        println!("Last updated: {}", ts.format("%Y-%m-%d %H:%M UTC"));
    }
    if period.status.is_locked() {
        locked(format!(
            "Period {} · editing disabled for this period",
            period.status.as_str().to_uppercase()
        ));
    }
    println!();

    let mut table = Table::new(vec![
        Column::left("DATE", 10),
        Column::left("DAY", 9),
        Column::left("HOLIDAY", 28),
        Column::left("IN", 5),
        Column::left("OUT", 5),
        Column::right("LUNCH", 5),
        Column::right("HOURS", 5),
        Column::left("SICK", 4),
        Column::left("NOTES", 20),
    ]);

    for day in day_rows(&key) {
        let entry = period.entry(&day.date);
        table.add_row(vec![
            day.date.to_string(),
            day.day_name.to_string(),
            match day.holiday {
                Some(name) => name.to_string(),
                None if day.is_weekend() => "(weekend)".to_string(),
                None => String::new(),
            },
            entry
                .and_then(|e| e.start_time.as_ref().map(format_time))
                .unwrap_or_else(|| "--:--".into()),
            entry
                .and_then(|e| e.end_time.as_ref().map(format_time))
                .unwrap_or_else(|| "--:--".into()),
            entry
                .map(|e| format_hours(e.lunch_break_hours))
                .unwrap_or_default(),
            format_hours(entry.map_or(0.0, |e| e.total_hours)),
            if entry.is_some_and(|e| e.is_sick_day) {
                "yes"
            } else {
                ""
            }
            .to_string(),
            entry.map(|e| e.notes.clone()).unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());

    let totals = aggregate(&period);
    println!();
    println!("Total hours : {}", format_hours_precise(totals.total_hours));
    println!(
        "Sick days   : {} ({}h)",
        totals.sick_day_count,
        format_hours(totals.sick_hours)
    );

    Ok(())
}

use crate::cli::parser::Commands;
use crate::core::holidays::compute_holidays;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::weekday_name;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Holidays { year } = cmd else {
        return Ok(());
    };

    header(format!("BC statutory holidays {year}"));

    let mut table = Table::new(vec![
        Column::left("DATE", 10),
        Column::left("DAY", 9),
        Column::left("HOLIDAY", 28),
    ]);
    for h in compute_holidays(*year) {
        table.add_row(vec![
            h.date.to_string(),
            weekday_name(&h.date).to_string(),
            h.name.to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

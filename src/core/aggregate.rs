use crate::models::period::PeriodData;
use crate::models::time_entry::SICK_DAY_HOURS;
use serde::Serialize;

/// Period totals, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PeriodTotals {
    pub total_hours: f64,
    pub sick_day_count: usize,
    pub sick_hours: f64,
}

pub fn aggregate(period: &PeriodData) -> PeriodTotals {
    let (total_hours, sick_day_count) = period
        .entries
        .values()
        .fold((0.0, 0usize), |(hours, sick), e| {
            (hours + e.total_hours, sick + usize::from(e.is_sick_day))
        });

    PeriodTotals {
        total_hours,
        sick_day_count,
        sick_hours: sick_day_count as f64 * SICK_DAY_HOURS,
    }
}

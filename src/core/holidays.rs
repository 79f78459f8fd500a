//! British Columbia statutory holiday calendar.

use crate::models::holiday::Holiday;
use crate::models::period::PeriodKey;
use crate::utils::date::weekday_name;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// All BC statutory holidays of `year`, sorted by date.
pub fn compute_holidays(year: i32) -> Vec<Holiday> {
    let fixed = [
        (1, 1, "New Year's Day"),
        (7, 1, "Canada Day"),
        (9, 30, "Truth and Reconciliation Day"),
        (11, 11, "Remembrance Day"),
        (12, 25, "Christmas Day"),
    ];

    let mut out: Vec<Holiday> = fixed
        .iter()
        .filter_map(|&(m, d, name)| NaiveDate::from_ymd_opt(year, m, d).map(|date| Holiday::new(date, name)))
        .collect();

    let ruled = [
        (nth_weekday_of_month(year, 2, Weekday::Mon, 3), "Family Day"),
        (good_friday(year), "Good Friday"),
        (monday_on_or_before(year, 5, 25), "Victoria Day"),
        (nth_weekday_of_month(year, 8, Weekday::Mon, 1), "BC Day"),
        (nth_weekday_of_month(year, 9, Weekday::Mon, 1), "Labour Day"),
        (nth_weekday_of_month(year, 10, Weekday::Mon, 2), "Thanksgiving Day"),
    ];

    out.extend(
        ruled
            .into_iter()
            .filter_map(|(date, name)| date.map(|d| Holiday::new(d, name))),
    );

    out.sort();
    out
}

/// The `n`-th `weekday` of a month (`month` is 1-based, `n` starts at 1).
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// The closest Monday on or before the given date (`month` is 1-based).
pub fn monday_on_or_before(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back))
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian computus).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

pub fn good_friday(year: i32) -> Option<NaiveDate> {
    easter_sunday(year)?.checked_sub_days(Days::new(2))
}

pub fn is_holiday<'a>(date: &NaiveDate, holidays: &'a [Holiday]) -> Option<&'a Holiday> {
    holidays.iter().find(|h| h.date == *date)
}

/// One row of the period grid: the day, its weekday and its holiday, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub day_name: &'static str,
    pub holiday: Option<&'static str>,
}

impl DayRow {
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Every day of the period, annotated with BC holidays.
pub fn day_rows(key: &PeriodKey) -> Vec<DayRow> {
    let holidays = compute_holidays(key.year);
    key.days()
        .into_iter()
        .map(|date| DayRow {
            date,
            day_name: weekday_name(&date),
            holiday: is_holiday(&date, &holidays).map(|h| h.name),
        })
        .collect()
}

use chrono::{NaiveDate, Weekday};
use scpayroll::core::holidays::{
    compute_holidays, day_rows, easter_sunday, good_friday, is_holiday, monday_on_or_before,
    nth_weekday_of_month,
};
use scpayroll::models::period::PeriodKey;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn holiday_on(year: i32, name: &str) -> NaiveDate {
    compute_holidays(year)
        .into_iter()
        .find(|h| h.name == name)
        .unwrap_or_else(|| panic!("{name} missing in {year}"))
        .date
}

#[test]
fn test_2026_calendar_contains_required_days() {
    let hs = compute_holidays(2026);

    assert_eq!(hs.len(), 11);
    assert_eq!(is_holiday(&d(2026, 1, 1), &hs).unwrap().name, "New Year's Day");
    assert_eq!(is_holiday(&d(2026, 4, 3), &hs).unwrap().name, "Good Friday");
    assert_eq!(is_holiday(&d(2026, 2, 16), &hs).unwrap().name, "Family Day");
}

#[test]
fn test_2026_rule_based_days() {
    assert_eq!(holiday_on(2026, "BC Day"), d(2026, 8, 3));
    assert_eq!(holiday_on(2026, "Labour Day"), d(2026, 9, 7));
    assert_eq!(holiday_on(2026, "Thanksgiving Day"), d(2026, 10, 12));
    assert_eq!(holiday_on(2026, "Truth and Reconciliation Day"), d(2026, 9, 30));
}

#[test]
fn test_holidays_sorted_by_date() {
    let hs = compute_holidays(2031);
    assert!(hs.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(hs.first().unwrap().name, "New Year's Day");
    assert_eq!(hs.last().unwrap().name, "Christmas Day");
}

#[test]
fn test_good_friday_is_computed_for_any_year() {
    assert_eq!(easter_sunday(2000), Some(d(2000, 4, 23)));
    assert_eq!(easter_sunday(2019), Some(d(2019, 4, 21)));
    assert_eq!(easter_sunday(2024), Some(d(2024, 3, 31)));
    assert_eq!(easter_sunday(2025), Some(d(2025, 4, 20)));
    assert_eq!(easter_sunday(2027), Some(d(2027, 3, 28)));

    assert_eq!(good_friday(2024), Some(d(2024, 3, 29)));
    assert_eq!(good_friday(2025), Some(d(2025, 4, 18)));
    assert_eq!(holiday_on(2025, "Good Friday"), d(2025, 4, 18));
}

#[test]
fn test_nth_weekday_of_month() {
    assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Mon, 3), Some(d(2026, 2, 16)));
    assert_eq!(nth_weekday_of_month(2025, 2, Weekday::Mon, 3), Some(d(2025, 2, 17)));
    // no fifth Monday in February 2026
    assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Mon, 5), None);
}

#[test]
fn test_monday_on_or_before() {
    // 2025-05-25 is a Sunday
    assert_eq!(monday_on_or_before(2025, 5, 25), Some(d(2025, 5, 19)));
    // already a Monday
    assert_eq!(monday_on_or_before(2026, 5, 25), Some(d(2026, 5, 25)));
    assert_eq!(holiday_on(2025, "Victoria Day"), d(2025, 5, 19));
}

#[test]
fn test_day_rows_annotate_holidays() {
    let key: PeriodKey = "2026-1-2nd".parse().unwrap();
    let rows = day_rows(&key);

    assert_eq!(rows.len(), 13); // Feb 16..=28
    assert_eq!(rows[0].date, d(2026, 2, 16));
    assert_eq!(rows[0].day_name, "Monday");
    assert_eq!(rows[0].holiday, Some("Family Day"));
    assert!(rows[1..].iter().all(|r| r.holiday.is_none()));
}

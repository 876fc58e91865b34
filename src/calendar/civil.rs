use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// Years subtracted from today when no date of birth is given.
pub const DEFAULT_AGE_YEARS: u32 = 25;
/// Days added to today when no goal date is given.
pub const DEFAULT_GOAL_DAYS: u64 = 30;

/// Calendar date observed in `zone` at instant `now`.
///
/// Independent of the process's local zone.
pub fn civil_date_in_zone(zone: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&zone).date_naive()
}

/// Gregorian leap year: divisible by 4 and (not by 100, or by 400).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 365 or 366.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// 1-based ordinal day within the civil year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Whole weeks from `start` to `end`, floored. Negative when `end < start`.
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().div_euclid(7)
}

/// Days from `start` to `end`.
///
/// Civil dates are whole days, so the ceiling of the span is the span itself.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Same month/day, [`DEFAULT_AGE_YEARS`] earlier (Feb 29 falls back to Feb 28).
pub fn default_date_of_birth(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(DEFAULT_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// [`DEFAULT_GOAL_DAYS`] after today.
pub fn default_goal_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_GOAL_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/civil.rs"]
mod tests;

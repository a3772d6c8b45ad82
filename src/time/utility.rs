use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};

pub const ONE_WEEK: i64 = 7;

// Weekday numbering runs Sunday = 1 through Saturday = 7.
const SATURDAY: i64 = 7;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum WeekdaySearch {
    Next,
    Previous
}

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Signed number of days from `current` to the next (0..=6) or previous
/// (-6..=0) occurrence of `desired`.
///
/// If `desired` is Monday and `current` is Tuesday, the previous Monday is
/// -1 days away and the next Monday is +6 days away.
pub fn weekday_offset(direction: WeekdaySearch, desired: Weekday, current: Weekday) -> i64 {
    let desired = desired.number_from_sunday() as i64;
    let current = current.number_from_sunday() as i64;

    match direction {
        WeekdaySearch::Next => if current <= desired {
            desired - current
        } else {
            (SATURDAY - current) + desired
        },
        WeekdaySearch::Previous => if current < desired {
            (desired - SATURDAY) - current
        } else {
            desired - current
        }
    }
}

/// The `n`-th `weekday` of `month` in `year`, counted from the 1st.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = weekday_offset(WeekdaySearch::Next, weekday, first.weekday());
    first.checked_add_signed(TimeDelta::days(offset + (n as i64 - 1) * ONE_WEEK))
}

pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let last = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))?;
    let offset = weekday_offset(WeekdaySearch::Previous, weekday, last.weekday());
    last.checked_add_signed(TimeDelta::days(offset))
}

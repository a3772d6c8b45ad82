use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::time::recurringholiday::weekendadjustment::ObservanceConfig;

use super::holiday::Holiday;
use super::holidaykind::HolidayKind;

#[inline]
pub fn is_saturday(d: NaiveDate) -> bool {
    d.weekday() == Weekday::Sat
}

#[inline]
pub fn is_sunday(d: NaiveDate) -> bool {
    d.weekday() == Weekday::Sun
}

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    is_saturday(d) || is_sunday(d)
}

pub fn is_new_years_eve(d: NaiveDate) -> bool {
    d.month() == 12 && d.day() == 31
}

pub fn observable_on_saturday(d: NaiveDate, config: &ObservanceConfig) -> bool {
    is_saturday(d) && config.saturday_observable()
}

pub fn observable_on_sunday(d: NaiveDate, config: &ObservanceConfig) -> bool {
    is_sunday(d) && config.sunday_observable()
}

/// Applies weekend observance to the literal date of `kind`.
///
/// A weekend date whose shift is enabled moves to the adjacent weekday.
/// When the shift is disabled an actual-day holiday is kept on its literal
/// date and marked unobserved; any other kind is not produced at all.
pub fn create_holiday(base_date: Option<NaiveDate>,
                      kind: HolidayKind,
                      config: &ObservanceConfig) -> Option<Holiday> {
    let base_date = base_date?;

    if observable_on_saturday(base_date, config) || observable_on_sunday(base_date, config) {
        let observed_date = config.adjust(base_date)?;
        return Some(Holiday::new(observed_date, kind, true));
    }

    if !is_weekend(base_date) {
        return Some(Holiday::new(base_date, kind, true));
    }

    if kind.is_actual_day() {
        Some(Holiday::new(base_date, kind, false))
    } else {
        debug!(%kind, %base_date, "weekend date without observance, holiday dropped");
        None
    }
}

/// New Years eve is a holiday in `year` only when the next New Years day
/// is observed on December 31st.
pub fn new_years_eve(year: i32, config: &ObservanceConfig) -> Option<Holiday> {
    let next_new_years_day = HolidayKind::NewYearsDay.base_date(year.checked_add(1)?);
    create_holiday(next_new_years_day, HolidayKind::NewYearsEve, config)
        .filter(|holiday| is_new_years_eve(holiday.date()))
}

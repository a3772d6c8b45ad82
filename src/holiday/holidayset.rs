use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::time::recurringholiday::weekendadjustment::ObservanceConfig;

use super::holiday::Holiday;
use super::holidayerror::HolidayError;
use super::holidaykind::HolidayKind;
use super::holidays::{CalendarDay, Holidays, require_calendar_day};
use super::observancerule::{create_holiday, new_years_eve};

/// Largest year accepted for a holiday set; bigger values fall back to the
/// current year.
pub fn maximum_year() -> i32 {
    NaiveDate::MAX.year()
}

/// `year` when `0 < year < maximum_year()`, otherwise the current year.
pub fn normalize_year(year: i32) -> i32 {
    if 0 < year && year < maximum_year() {
        year
    } else {
        let current_year = Local::now().year();
        warn!(year, current_year, "year out of range, using the current year");
        current_year
    }
}

/// The federal holidays of one year.
///
/// A new set is empty; [`HolidaySet::build`] computes every holiday at once
/// and queries fail with `NotInitialized` until it has been called.
#[derive(Clone, Debug)]
pub struct HolidaySet {
    year: i32,
    config: ObservanceConfig,
    holiday_map: Option<BTreeMap<HolidayKind, Holiday>>
}

impl HolidaySet {
    pub fn new(year: i32, config: ObservanceConfig) -> HolidaySet {
        HolidaySet {
            year: normalize_year(year),
            config,
            holiday_map: None
        }
    }

    /// New set for `year`, already built.
    pub fn built(year: i32, config: ObservanceConfig) -> HolidaySet {
        let mut holiday_set = HolidaySet::new(year, config);
        holiday_set.build();
        holiday_set
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn config(&self) -> &ObservanceConfig {
        &self.config
    }

    pub fn is_built(&self) -> bool {
        self.holiday_map.is_some()
    }

    /// Computes the holidays of the year. Building an already built set
    /// leaves it untouched.
    pub fn build(&mut self) {
        if self.is_built() {
            return;
        }

        let mut holiday_map = BTreeMap::new();
        for kind in HolidayKind::ALL {
            let holiday = match kind {
                HolidayKind::NewYearsEve => new_years_eve(self.year, &self.config),
                _ => create_holiday(kind.base_date(self.year), kind, &self.config)
            };

            if let Some(holiday) = holiday {
                debug!(year = self.year, %kind, date = %holiday.date(), observed = holiday.is_observed(), "holiday");
                holiday_map.insert(kind, holiday);
            }
        }

        info!(year = self.year, count = holiday_map.len(), "holidays built");
        self.holiday_map = Some(holiday_map);
    }

    fn holiday_map(&self) -> Result<&BTreeMap<HolidayKind, Holiday>, HolidayError> {
        self.holiday_map
            .as_ref()
            .ok_or(HolidayError::NotInitialized { year: self.year })
    }

    /// Number of holidays, zero before the set is built.
    pub fn len(&self) -> usize {
        self.holiday_map.as_ref().map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, kind: HolidayKind) -> Result<Option<Holiday>, HolidayError> {
        Ok(self.holiday_map()?.get(&kind).copied())
    }

    /// Holidays in ascending date order.
    pub fn holidays(&self) -> Result<Vec<Holiday>, HolidayError> {
        let mut holidays = self.holidays_by_kind()?;
        holidays.sort_by_key(|holiday| (holiday.date(), holiday.kind()));
        Ok(holidays)
    }

    pub fn holidays_by_kind(&self) -> Result<Vec<Holiday>, HolidayError> {
        Ok(self.holiday_map()?.values().copied().collect())
    }

    /// One export line per holiday, by date.
    pub fn list_holidays(&self) -> Result<Vec<String>, HolidayError> {
        Ok(self.holidays()?
            .iter()
            .map(Holiday::to_string)
            .collect())
    }
}

impl Holidays for HolidaySet {
    fn which_holiday<D: CalendarDay>(&self, date: D) -> Result<Option<Holiday>, HolidayError> {
        let holiday_map = self.holiday_map()?;
        let day = require_calendar_day(&date)?;
        Ok(holiday_map
            .values()
            .find(|holiday| holiday.date() == day)
            .copied())
    }
}

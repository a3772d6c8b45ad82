use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::time::recurringholiday::weekendadjustment::ObservanceConfig;

use super::holiday::Holiday;
use super::holidayerror::HolidayError;
use super::holidaykind::HolidayKind;
use super::holidays::{CalendarDay, Holidays};
use super::holidayset::HolidaySet;

/// A holiday set with some holidays left unobserved.
///
/// Suppressed holidays stay in the underlying [`HolidaySet`] but are hidden
/// from lookups and from the exported listing.
#[derive(Clone, Debug)]
pub struct SuppressedHolidaySet {
    holiday_set: HolidaySet,
    suppressed: BTreeSet<HolidayKind>
}

impl SuppressedHolidaySet {
    pub fn new(year: i32, config: ObservanceConfig) -> SuppressedHolidaySet {
        SuppressedHolidaySet::from_holiday_set(HolidaySet::new(year, config))
    }

    pub fn from_holiday_set(holiday_set: HolidaySet) -> SuppressedHolidaySet {
        SuppressedHolidaySet {
            holiday_set,
            suppressed: BTreeSet::new()
        }
    }

    pub fn build(&mut self) {
        self.holiday_set.build();
    }

    pub fn holiday_set(&self) -> &HolidaySet {
        &self.holiday_set
    }

    pub fn year(&self) -> i32 {
        self.holiday_set.year()
    }

    pub fn config(&self) -> &ObservanceConfig {
        self.holiday_set.config()
    }

    pub fn is_built(&self) -> bool {
        self.holiday_set.is_built()
    }

    /// Suppresses the holiday named `kind_name` (e.g. `"COLUMBUS_DAY"`).
    ///
    /// Returns whether the holiday was newly suppressed. An empty name is
    /// ignored and returns `false`.
    pub fn suppress(&mut self, kind_name: &str) -> Result<bool, HolidayError> {
        if kind_name.is_empty() {
            return Ok(false);
        }
        let kind: HolidayKind = kind_name.parse()?;
        Ok(self.suppress_kind(kind))
    }

    pub fn suppress_kind(&mut self, kind: HolidayKind) -> bool {
        let inserted = self.suppressed.insert(kind);
        if inserted {
            debug!(year = self.year(), %kind, "holiday suppressed");
        }
        inserted
    }

    /// Whether `kind_name` is suppressed; unknown names are never suppressed.
    pub fn is_suppressed(&self, kind_name: &str) -> bool {
        kind_name
            .parse::<HolidayKind>()
            .is_ok_and(|kind| self.is_kind_suppressed(kind))
    }

    pub fn is_kind_suppressed(&self, kind: HolidayKind) -> bool {
        self.suppressed.contains(&kind)
    }

    pub fn suppressed(&self) -> impl Iterator<Item = HolidayKind> + '_ {
        self.suppressed.iter().copied()
    }

    /// A built set for `year` carrying over the suppressed holidays and the
    /// observance flags. An out of range year falls back to the current one.
    pub fn clone_for_year(&self, year: i32) -> SuppressedHolidaySet {
        let mut cloned = SuppressedHolidaySet {
            holiday_set: HolidaySet::new(year, *self.config()),
            suppressed: self.suppressed.clone()
        };
        cloned.build();
        info!(from = self.year(), to = cloned.year(), suppressed = cloned.suppressed.len(), "holidays cloned");
        cloned
    }

    /// Unsuppressed holidays in ascending date order.
    pub fn holidays(&self) -> Result<Vec<Holiday>, HolidayError> {
        Ok(self.holiday_set
            .holidays()?
            .into_iter()
            .filter(|holiday| !self.is_kind_suppressed(holiday.kind()))
            .collect())
    }

    pub fn list_holidays(&self) -> Result<Vec<String>, HolidayError> {
        Ok(self.holidays()?
            .iter()
            .map(Holiday::to_string)
            .collect())
    }
}

impl Holidays for SuppressedHolidaySet {
    fn which_holiday<D: CalendarDay>(&self, date: D) -> Result<Option<Holiday>, HolidayError> {
        Ok(self.holiday_set
            .which_holiday(date)?
            .filter(|holiday| !self.is_kind_suppressed(holiday.kind())))
    }
}

use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
    TimeZone
};

use super::holiday::Holiday;
use super::holidayerror::HolidayError;

/// Anything that can be reduced to a calendar day for a holiday lookup.
///
/// Timestamps are truncated to their date, so equality is by calendar day
/// only. An absent value yields `None` and is rejected by the lookup.
pub trait CalendarDay {
    fn calendar_day(&self) -> Option<NaiveDate>;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl<T: CalendarDay> CalendarDay for Option<T> {
    fn calendar_day(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(CalendarDay::calendar_day)
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> Option<NaiveDate> {
        (**self).calendar_day()
    }
}

pub(crate) fn require_calendar_day<D: CalendarDay>(date: &D) -> Result<NaiveDate, HolidayError> {
    date.calendar_day()
        .ok_or_else(|| HolidayError::invalid_input("date is missing, cannot determine holiday"))
}

pub trait Holidays {
    /// The holiday recognised on `date`, if any.
    ///
    /// Fails with `NotInitialized` before the holidays are built and with
    /// `InvalidInput` when no date is given.
    fn which_holiday<D: CalendarDay>(&self, date: D) -> Result<Option<Holiday>, HolidayError>;

    fn is_holiday<D: CalendarDay>(&self, date: D) -> Result<bool, HolidayError> {
        Ok(self.which_holiday(date)?.is_some())
    }
}

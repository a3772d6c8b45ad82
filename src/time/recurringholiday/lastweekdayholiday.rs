use chrono::{NaiveDate, Weekday};

use super::recurringholiday::RecurringHoliday;
use super::super::utility::last_weekday_of_month;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub const fn new(month: u32, weekday: Weekday) -> LastWeekdayHoliday {
        LastWeekdayHoliday { month, weekday }
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn base_date(&self, year: i32) -> Option<NaiveDate> {
        last_weekday_of_month(year, self.month, self.weekday)
    }
}

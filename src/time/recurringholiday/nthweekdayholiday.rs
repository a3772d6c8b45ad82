use chrono::{
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use super::super::utility::nth_weekday_of_month;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub const fn new(month: u32, n: u8, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, n, weekday }
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn base_date(&self, year: i32) -> Option<NaiveDate> {
        nth_weekday_of_month(year, self.month, self.weekday, self.n)
    }
}

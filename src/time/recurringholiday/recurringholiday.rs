use chrono::{Datelike, NaiveDate};


pub trait RecurringHoliday {

    /// The literal anniversary of the holiday in `year`, before any weekend
    /// observance is applied.
    fn base_date(&self, year: i32) -> Option<NaiveDate>;

    fn is_base_date(&self, d: &NaiveDate) -> bool {
        self.base_date(d.year()).is_some_and(|base| base == *d)
    }
}

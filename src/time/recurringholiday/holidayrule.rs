use chrono::NaiveDate;

use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

/// How the literal date of a holiday is derived for a given year.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum HolidayRule {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    LastWeekday(LastWeekdayHoliday)
}

impl RecurringHoliday for HolidayRule {
    fn base_date(&self, year: i32) -> Option<NaiveDate> {
        match self {
            HolidayRule::FixedDate(rule)   => rule.base_date(year),
            HolidayRule::NthWeekday(rule)  => rule.base_date(year),
            HolidayRule::LastWeekday(rule) => rule.base_date(year)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dispatches_to_each_rule_shape() {
        let christmas = HolidayRule::FixedDate(FixedDateHoliday::new(12, 25));
        let thanksgiving = HolidayRule::NthWeekday(NthWeekdayHoliday::new(11, 4, Weekday::Thu));
        let memorial = HolidayRule::LastWeekday(LastWeekdayHoliday::new(5, Weekday::Mon));

        assert_eq!(christmas.base_date(2022), Some(ymd(2022, 12, 25)));
        assert_eq!(thanksgiving.base_date(2022), Some(ymd(2022, 11, 24)));
        assert_eq!(memorial.base_date(2022), Some(ymd(2022, 5, 30)));

        assert!(memorial.is_base_date(&ymd(2023, 5, 29)));
        assert!(!memorial.is_base_date(&ymd(2023, 5, 22)));
    }

    #[test]
    fn impossible_fixed_date_has_no_base_date() {
        let rule = HolidayRule::FixedDate(FixedDateHoliday::new(2, 29));
        assert_eq!(rule.base_date(2023), None);
        assert_eq!(rule.base_date(2024), Some(ymd(2024, 2, 29)));
    }
}

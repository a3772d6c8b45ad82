use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

use super::holidayerror::HolidayError;

/// U.S. federal holidays.
///
/// New Years eve is only a holiday in years where the following New Years
/// day, being a Saturday, is observed on December 31st.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    ChristmasDay,
    ColumbusDay,
    IndependenceDay,
    JuneteenthDay,
    LaborDay,
    #[serde(rename = "MARTINLUTHERKINGJR_DAY")]
    MartinLutherKingJrDay,
    MemorialDay,
    #[serde(rename = "NEWYEARS_DAY")]
    NewYearsDay,
    #[serde(rename = "NEWYEARS_EVE")]
    NewYearsEve,
    PresidentsDay,
    ThanksgivingDay,
    VeteransDay
}

impl HolidayKind {
    pub const ALL: [HolidayKind; 12] = [
        HolidayKind::ChristmasDay,
        HolidayKind::ColumbusDay,
        HolidayKind::IndependenceDay,
        HolidayKind::JuneteenthDay,
        HolidayKind::LaborDay,
        HolidayKind::MartinLutherKingJrDay,
        HolidayKind::MemorialDay,
        HolidayKind::NewYearsDay,
        HolidayKind::NewYearsEve,
        HolidayKind::PresidentsDay,
        HolidayKind::ThanksgivingDay,
        HolidayKind::VeteransDay
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HolidayKind::ChristmasDay          => "CHRISTMAS_DAY",
            HolidayKind::ColumbusDay           => "COLUMBUS_DAY",
            HolidayKind::IndependenceDay       => "INDEPENDENCE_DAY",
            HolidayKind::JuneteenthDay         => "JUNETEENTH_DAY",
            HolidayKind::LaborDay              => "LABOR_DAY",
            HolidayKind::MartinLutherKingJrDay => "MARTINLUTHERKINGJR_DAY",
            HolidayKind::MemorialDay           => "MEMORIAL_DAY",
            HolidayKind::NewYearsDay           => "NEWYEARS_DAY",
            HolidayKind::NewYearsEve           => "NEWYEARS_EVE",
            HolidayKind::PresidentsDay         => "PRESIDENTS_DAY",
            HolidayKind::ThanksgivingDay       => "THANKSGIVING_DAY",
            HolidayKind::VeteransDay           => "VETERANS_DAY"
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HolidayKind::ChristmasDay          => "Christmas day",
            HolidayKind::ColumbusDay           => "Columbus day",
            HolidayKind::IndependenceDay       => "Independence day",
            HolidayKind::JuneteenthDay         => "Juneteenth day",
            HolidayKind::LaborDay              => "Labor day",
            HolidayKind::MartinLutherKingJrDay => "Martin Luther King Jr day",
            HolidayKind::MemorialDay           => "Memorial day",
            HolidayKind::NewYearsDay           => "New Years day",
            HolidayKind::NewYearsEve           => "New Years eve",
            HolidayKind::PresidentsDay         => "Presidents day",
            HolidayKind::ThanksgivingDay       => "Thanksgiving day",
            HolidayKind::VeteransDay           => "Veterans day"
        }
    }

    /// Actual-day holidays are pinned to a calendar date and so may land on
    /// any day of the week, weekends included.
    pub fn is_actual_day(&self) -> bool {
        matches!(self,
            HolidayKind::ChristmasDay |
            HolidayKind::IndependenceDay |
            HolidayKind::JuneteenthDay |
            HolidayKind::NewYearsDay |
            HolidayKind::VeteransDay)
    }

    /// Rule producing the literal date, `None` for New Years eve which is
    /// derived from the following New Years day instead.
    pub fn rule(&self) -> Option<HolidayRule> {
        let rule = match self {
            HolidayKind::ChristmasDay          => HolidayRule::FixedDate(FixedDateHoliday::new(12, 25)),
            HolidayKind::ColumbusDay           => HolidayRule::NthWeekday(NthWeekdayHoliday::new(10, 2, Weekday::Mon)),
            HolidayKind::IndependenceDay       => HolidayRule::FixedDate(FixedDateHoliday::new(7, 4)),
            HolidayKind::JuneteenthDay         => HolidayRule::FixedDate(FixedDateHoliday::new(6, 19)),
            HolidayKind::LaborDay              => HolidayRule::NthWeekday(NthWeekdayHoliday::new(9, 1, Weekday::Mon)),
            HolidayKind::MartinLutherKingJrDay => HolidayRule::NthWeekday(NthWeekdayHoliday::new(1, 3, Weekday::Mon)),
            HolidayKind::MemorialDay           => HolidayRule::LastWeekday(LastWeekdayHoliday::new(5, Weekday::Mon)),
            HolidayKind::NewYearsDay           => HolidayRule::FixedDate(FixedDateHoliday::new(1, 1)),
            HolidayKind::NewYearsEve           => return None,
            HolidayKind::PresidentsDay         => HolidayRule::NthWeekday(NthWeekdayHoliday::new(2, 3, Weekday::Mon)),
            HolidayKind::ThanksgivingDay       => HolidayRule::NthWeekday(NthWeekdayHoliday::new(11, 4, Weekday::Thu)),
            HolidayKind::VeteransDay           => HolidayRule::FixedDate(FixedDateHoliday::new(11, 11))
        };
        Some(rule)
    }

    pub fn base_date(&self, year: i32) -> Option<NaiveDate> {
        self.rule().and_then(|rule| rule.base_date(year))
    }
}

impl FromStr for HolidayKind {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HolidayKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HolidayError::UnknownHolidayKind(s.to_owned()))
    }
}

impl Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in HolidayKind::ALL {
            assert_eq!(kind.name().parse::<HolidayKind>(), Ok(kind));
        }
        assert_eq!(
            "EASTER_DAY".parse::<HolidayKind>(),
            Err(HolidayError::UnknownHolidayKind("EASTER_DAY".to_owned()))
        );
        assert!("columbus_day".parse::<HolidayKind>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        for kind in HolidayKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn actual_days() {
        let actual: Vec<HolidayKind> = HolidayKind::ALL
            .into_iter()
            .filter(HolidayKind::is_actual_day)
            .collect();
        assert_eq!(actual, vec![
            HolidayKind::ChristmasDay,
            HolidayKind::IndependenceDay,
            HolidayKind::JuneteenthDay,
            HolidayKind::NewYearsDay,
            HolidayKind::VeteransDay
        ]);
    }

    #[test]
    fn only_new_years_eve_lacks_a_rule() {
        for kind in HolidayKind::ALL {
            assert_eq!(kind.rule().is_none(), kind == HolidayKind::NewYearsEve);
        }
        assert_eq!(HolidayKind::NewYearsEve.base_date(2021), None);
        assert_eq!(HolidayKind::MartinLutherKingJrDay.base_date(2021), NaiveDate::from_ymd_opt(2021, 1, 18));
    }
}

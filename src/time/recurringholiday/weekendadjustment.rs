use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

impl WeekendAdjustment {
    #[inline]
    pub fn apply(self, d: NaiveDate) -> Option<NaiveDate> {
        d.checked_add_signed(TimeDelta::days(self as i64))
    }
}

fn observable() -> bool {
    true
}

/// Weekend observance flags.
///
/// With `saturday_observable` set, a holiday falling on a Saturday is
/// observed on the prior Friday; with `sunday_observable` set, a Sunday
/// holiday is observed on the following Monday. Both default to `true`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ObservanceConfig {
    #[serde(default = "observable")]
    saturday_observable: bool,
    #[serde(default = "observable")]
    sunday_observable: bool
}

impl Default for ObservanceConfig {
    fn default() -> Self {
        ObservanceConfig {
            saturday_observable: true,
            sunday_observable: true
        }
    }
}

impl ObservanceConfig {
    pub fn new(saturday_observable: bool, sunday_observable: bool) -> ObservanceConfig {
        ObservanceConfig { saturday_observable, sunday_observable }
    }

    pub fn saturday_observable(&self) -> bool {
        self.saturday_observable
    }

    pub fn sunday_observable(&self) -> bool {
        self.sunday_observable
    }

    /// The shift applied to a holiday landing on `weekday`.
    pub fn adjustment(&self, weekday: Weekday) -> WeekendAdjustment {
        match weekday {
            Weekday::Sat if self.saturday_observable => WeekendAdjustment::PreviousWeekday,
            Weekday::Sun if self.sunday_observable => WeekendAdjustment::NextWeekday,
            _ => WeekendAdjustment::Unadjusted
        }
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.adjustment(d.weekday()).apply(d)
    }
}

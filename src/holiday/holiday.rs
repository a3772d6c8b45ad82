use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holidaykind::HolidayKind;

/// A holiday as recognised in a particular year.
///
/// `observed` is false only for an actual-day holiday that landed on a
/// weekend day whose shift is disabled, i.e. the holiday occurs on the
/// literal date without a weekday observance.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    kind: HolidayKind,
    observed: bool
}

impl Holiday {
    pub fn new(date: NaiveDate, kind: HolidayKind, observed: bool) -> Holiday {
        Holiday { date, kind, observed }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }
}

/// `<Weekday> MM-dd-yyyy,<KIND>,<Display name>[,observed]`
impl Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}{}",
               self.date.format("%A %m-%d-%Y"),
               self.kind.name(),
               self.kind.display_name(),
               if self.observed { ",observed" } else { "" })
    }
}

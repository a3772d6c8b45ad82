use std::collections::BTreeSet;

use serde::Deserialize;

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::weekendadjustment::ObservanceConfig;

use super::holidayerror::HolidayError;
use super::holidaykind::HolidayKind;
use super::suppressedholidayset::SuppressedHolidaySet;

/// Observance flags plus unobserved holidays, reusable across years.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct HolidayProfile {
    config: ObservanceConfig,
    unobserved: BTreeSet<HolidayKind>
}

impl HolidayProfile {
    pub fn new<I>(config: ObservanceConfig, unobserved: I) -> HolidayProfile
        where I: IntoIterator<Item = HolidayKind> {
        HolidayProfile {
            config,
            unobserved: unobserved.into_iter().collect()
        }
    }

    /// Every federal holiday with Saturday and Sunday observance.
    pub fn federal() -> HolidayProfile {
        HolidayProfile::default()
    }

    /// The Federal Reserve Board stays open on the Friday before a Saturday
    /// holiday.
    pub fn federal_reserve_board() -> HolidayProfile {
        HolidayProfile {
            config: ObservanceConfig::new(false, true),
            unobserved: BTreeSet::new()
        }
    }

    pub fn corporate() -> HolidayProfile {
        HolidayProfile::new(ObservanceConfig::default(), [
            HolidayKind::ColumbusDay,
            HolidayKind::JuneteenthDay,
            HolidayKind::MartinLutherKingJrDay,
            HolidayKind::PresidentsDay,
            HolidayKind::VeteransDay
        ])
    }

    pub fn config(&self) -> &ObservanceConfig {
        &self.config
    }

    pub fn unobserved(&self) -> &BTreeSet<HolidayKind> {
        &self.unobserved
    }

    /// Built holidays of `year` under this profile.
    pub fn holidays(&self, year: i32) -> SuppressedHolidaySet {
        let mut holidays = SuppressedHolidaySet::new(year, self.config);
        for &kind in self.unobserved.iter() {
            holidays.suppress_kind(kind);
        }
        holidays.build();
        holidays
    }
}

fn observable() -> bool {
    true
}

#[derive(Deserialize)]
struct HolidayProfileJsonProp {
    #[serde(default = "observable")]
    saturday_observable: bool,
    #[serde(default = "observable")]
    sunday_observable: bool,
    #[serde(default)]
    unobserved: Vec<String>
}

pub fn holiday_profile_from_json(json_value: serde_json::Value) -> Result<HolidayProfile, ManagerError> {
    let json_prop: HolidayProfileJsonProp = parse_json_value(json_value)?;
    let unobserved = json_prop.unobserved
        .iter()
        .map(|name| name.parse::<HolidayKind>())
        .collect::<Result<Vec<HolidayKind>, HolidayError>>()?;
    Ok(HolidayProfile::new(
        ObservanceConfig::new(json_prop.saturday_observable, json_prop.sunday_observable),
        unobserved
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn profile_from_json_defaults() {
        let profile = holiday_profile_from_json(json!({ "name": "plain" })).unwrap();
        assert_eq!(profile, HolidayProfile::federal());
    }

    #[test]
    fn profile_from_json_with_unobserved() {
        let profile = holiday_profile_from_json(json!({
            "name": "corp",
            "unobserved": ["COLUMBUS_DAY", "JUNETEENTH_DAY", "MARTINLUTHERKINGJR_DAY", "PRESIDENTS_DAY", "VETERANS_DAY"]
        })).unwrap();
        assert_eq!(profile, HolidayProfile::corporate());
    }

    #[test]
    fn profile_from_json_rejects_unknown_kind() {
        let result = holiday_profile_from_json(json!({ "name": "bad", "unobserved": ["BOXING_DAY"] }));
        assert!(matches!(
            result,
            Err(ManagerError::HolidayError(HolidayError::UnknownHolidayKind(name))) if name == "BOXING_DAY"
        ));
    }
}

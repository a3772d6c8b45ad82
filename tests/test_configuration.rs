//! Holiday profiles and configuration loading.

use chrono::NaiveDate;
use serde_json::json;

use usholiday::configuration::{
    CORPORATE_PROFILE,
    Configuration,
    FEDERAL_PROFILE,
    FEDERAL_RESERVE_BOARD_PROFILE
};
use usholiday::holiday::holidayerror::HolidayError;
use usholiday::holiday::holidaykind::HolidayKind;
use usholiday::holiday::holidays::Holidays;
use usholiday::manager::manager::IManager;
use usholiday::manager::managererror::ManagerError;
use usholiday::time::recurringholiday::weekendadjustment::ObservanceConfig;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn built_in_profiles() {
    let configuration = Configuration::new();
    assert_eq!(
        configuration.holiday_profile_manager().names(),
        vec![CORPORATE_PROFILE, FEDERAL_PROFILE, FEDERAL_RESERVE_BOARD_PROFILE]
    );

    let federal = configuration.holiday_profile(FEDERAL_PROFILE).unwrap().holidays(2027);
    assert_eq!(federal.list_holidays().unwrap().len(), 12);
    assert_eq!(federal.is_holiday(ymd(2027, 12, 31)), Ok(true));

    let frb = configuration.holiday_profile(FEDERAL_RESERVE_BOARD_PROFILE).unwrap().holidays(2027);
    assert_eq!(frb.list_holidays().unwrap().len(), 11);
    assert_eq!(frb.which_holiday(ymd(2027, 12, 31)), Ok(None));
}

#[test]
fn corporate_profile_skips_five_holidays() {
    let configuration = Configuration::new();
    let corp = configuration.holiday_profile(CORPORATE_PROFILE).unwrap().holidays(2024);

    for kind in [
        HolidayKind::ColumbusDay,
        HolidayKind::JuneteenthDay,
        HolidayKind::MartinLutherKingJrDay,
        HolidayKind::PresidentsDay,
        HolidayKind::VeteransDay
    ] {
        let date = kind.base_date(2024).unwrap();
        assert_eq!(corp.is_holiday(date), Ok(false), "{kind} should not be observed");
        assert!(corp.is_suppressed(kind.name()));
    }
    assert_eq!(corp.list_holidays().unwrap().len(), 6);
}

#[test]
fn profiles_from_json() {
    let configuration = Configuration::new();
    configuration.from_json(json!({
        "holiday_profile": [
            { "name": "bank", "sunday_observable": true, "saturday_observable": false, "unobserved": ["COLUMBUS_DAY"] },
            { "name": "frb", "saturday_observable": true }
        ]
    })).unwrap();

    let bank = configuration.holiday_profile("bank").unwrap();
    assert_eq!(bank.config(), &ObservanceConfig::new(false, true));
    assert!(bank.unobserved().contains(&HolidayKind::ColumbusDay));

    // Replaces the built-in profile of the same name.
    let frb = configuration.holiday_profile("frb").unwrap();
    assert_eq!(frb.config(), &ObservanceConfig::default());
}

#[test]
fn unknown_profile() {
    let configuration = Configuration::new();
    let result = configuration.holiday_profile("nasa");
    assert!(matches!(result, Err(ManagerError::NameNotFoundError(name)) if name == "nasa"));
}

#[test]
fn unknown_kind_in_profile() {
    let configuration = Configuration::new();
    let result = configuration.from_json(json!({
        "holiday_profile": [ { "name": "bad", "unobserved": ["FESTIVUS"] } ]
    }));
    assert!(matches!(
        result,
        Err(ManagerError::HolidayError(HolidayError::UnknownHolidayKind(name))) if name == "FESTIVUS"
    ));
}

#[test]
fn profile_without_name_is_rejected() {
    let configuration = Configuration::new();
    let result = configuration.from_json(json!({
        "holiday_profile": [ { "saturday_observable": false } ]
    }));
    assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
}

#[test]
fn profiles_from_file() {
    let path = std::env::temp_dir().join(format!("usholiday-config-{}.json", std::process::id()));
    std::fs::write(&path, json!({
        "holiday_profile": [ { "name": "weekday_only", "saturday_observable": false, "sunday_observable": false } ]
    }).to_string()).unwrap();

    let configuration = Configuration::new();
    configuration.from_reader(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let holidays = configuration.holiday_profile("weekday_only").unwrap().holidays(2021);
    let christmas = holidays.which_holiday(ymd(2021, 12, 25)).unwrap().unwrap();
    assert!(!christmas.is_observed());
}

#[test]
fn missing_file() {
    let configuration = Configuration::new();
    let result = configuration.from_reader("/nonexistent/usholiday.json");
    match result {
        Err(err @ ManagerError::IOError { .. }) => {
            assert!(err.to_string().starts_with("/nonexistent/usholiday.json: "));
        }
        other => panic!("expected an IO error, got {other:?}"),
    }
}

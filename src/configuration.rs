use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::info;

use crate::holiday::holidayprofile::{
    HolidayProfile,
    holiday_profile_from_json
};
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};

pub const FEDERAL_PROFILE: &str = "federal";
pub const FEDERAL_RESERVE_BOARD_PROFILE: &str = "frb";
pub const CORPORATE_PROFILE: &str = "corp";

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_profile: Vec<serde_json::Value>
}

pub struct Configuration {
    holiday_profile_manager_cell: RefCell<Manager<HolidayProfile>>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    /// Configuration holding the built-in `federal`, `frb` and `corp`
    /// profiles.
    pub fn new() -> Configuration {
        let holiday_profile_manager = Manager::new(holiday_profile_from_json);
        holiday_profile_manager.insert(FEDERAL_PROFILE.to_owned(), HolidayProfile::federal());
        holiday_profile_manager.insert(FEDERAL_RESERVE_BOARD_PROFILE.to_owned(), HolidayProfile::federal_reserve_board());
        holiday_profile_manager.insert(CORPORATE_PROFILE.to_owned(), HolidayProfile::corporate());
        Configuration {
            holiday_profile_manager_cell: RefCell::new(holiday_profile_manager)
        }
    }

    pub fn holiday_profile_manager(&self) -> RefMut<'_, Manager<HolidayProfile>> {
        self.holiday_profile_manager_cell.borrow_mut()
    }

    pub fn holiday_profile(&self, name: &str) -> Result<HolidayProfile, ManagerError> {
        self.holiday_profile_manager().get(name)
    }

    /// Loads `{ "holiday_profile": [...] }`; profiles replace any existing
    /// profile of the same name.
    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)
            .map_err(|source| ManagerError::io_error(file_path, source))?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.from_json_prop(json_prop, file_path)
    }

    pub fn from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        self.from_json_prop(json_prop, "<json>")
    }

    fn from_json_prop(&self, json_prop: ConfigurationJsonProp, source: &str) -> Result<(), ManagerError> {
        let holiday_profile_manager = self.holiday_profile_manager_cell.borrow_mut();
        holiday_profile_manager.insert_obj_from_json_vec(&json_prop.holiday_profile)?;
        info!(source, profiles = json_prop.holiday_profile.len(), "configuration loaded");
        Ok(())
    }
}

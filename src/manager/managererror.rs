use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::holiday::holidayerror::HolidayError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("{path}: {source}")]
    IOError {
        path: String,
        source: std::io::Error
    },
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    HolidayError(#[from] HolidayError)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn io_error(path: &str, source: std::io::Error) -> ManagerError {
        ManagerError::IOError { path: path.to_owned(), source }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: DeserializeOwned {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}

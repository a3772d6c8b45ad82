use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum HolidayError {
    #[error("holidays for {year} have not been built; call build() first")]
    NotInitialized { year: i32 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown holiday kind '{0}'")]
    UnknownHolidayKind(String)
}

impl HolidayError {
    pub fn invalid_input<T: Into<String>>(message: T) -> Self {
        HolidayError::InvalidInput(message.into())
    }
}

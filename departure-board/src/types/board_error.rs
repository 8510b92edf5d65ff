use std::fmt;

/// Represents errors that can occur while building or rendering a departure board.
#[derive(Debug, PartialEq)]
pub enum BoardError {
    InvalidStatus(String),     // Text that names none of the flight statuses
    InvalidDateFormat(String), // When a departure time can't be parsed
    UnsupportedLocale(String), // Currency locale that has no formatting rules
    NonFiniteAmount(f64),      // NaN or infinite amounts can't be priced
    Other(String),             // Generic error case with a custom message
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidStatus(ref status) => write!(f, "Invalid flight status: {}", status),
            BoardError::InvalidDateFormat(ref date_str) => {
                write!(f, "Invalid date format: {}", date_str)
            }
            BoardError::UnsupportedLocale(ref locale) => {
                write!(f, "Unsupported currency locale: {}", locale)
            }
            BoardError::NonFiniteAmount(amount) => {
                write!(f, "Amount can't be formatted as currency: {}", amount)
            }
            BoardError::Other(ref message) => write!(f, "Error: {}", message),
        }
    }
}

impl std::error::Error for BoardError {}

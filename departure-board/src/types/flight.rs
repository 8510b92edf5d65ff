use chrono::NaiveDateTime;

use super::{board_error::BoardError, flight_status::FlightStatus, DEPARTURE_TIME_FORMAT};

/// Represents a departing flight as shown on the board.
///
/// A canceled flight usually has no departure time, and the terminal stays
/// empty until the gate is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub departure_time: Option<NaiveDateTime>,
    pub terminal: Option<String>,
    pub flight_number: String,
    pub status: FlightStatus,
}

impl Flight {
    pub fn new(
        departure_time: Option<NaiveDateTime>,
        terminal: Option<&str>,
        flight_number: &str,
        status: FlightStatus,
    ) -> Self {
        Flight {
            departure_time,
            terminal: terminal.map(str::to_string),
            flight_number: flight_number.to_string(),
            status,
        }
    }
}

/// Parses a departure time written as `yyyy/MM/dd HH:mm`.
pub fn parse_departure_time(datetime_str: &str) -> Result<NaiveDateTime, BoardError> {
    NaiveDateTime::parse_from_str(datetime_str, DEPARTURE_TIME_FORMAT)
        .map_err(|_| BoardError::InvalidDateFormat(datetime_str.to_string()))
}

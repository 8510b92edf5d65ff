use std::fmt;

use super::board_error::BoardError;

/// Represents the various statuses a departing flight can have.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Canceled,
    Delayed,
    Boarding,
}

impl FlightStatus {
    /// Every status, in the order they are declared.
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::EnRoute,
        FlightStatus::Scheduled,
        FlightStatus::Canceled,
        FlightStatus::Delayed,
        FlightStatus::Boarding,
    ];

    /// Converts the `FlightStatus` variant to the label shown on the board.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::EnRoute => "En Route",
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Canceled => "Canceled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Boarding => "Boarding",
        }
    }

    /// Creates a `FlightStatus` variant from its label, ignoring case.
    pub fn from_str(status: &str) -> Result<FlightStatus, BoardError> {
        match status.trim().to_lowercase().as_str() {
            "en route" => Ok(FlightStatus::EnRoute),
            "scheduled" => Ok(FlightStatus::Scheduled),
            "canceled" => Ok(FlightStatus::Canceled),
            "delayed" => Ok(FlightStatus::Delayed),
            "boarding" => Ok(FlightStatus::Boarding),
            _ => Err(BoardError::InvalidStatus(status.to_string())),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(FlightStatus::EnRoute.as_str(), "En Route");
        assert_eq!(FlightStatus::Scheduled.as_str(), "Scheduled");
        assert_eq!(FlightStatus::Canceled.as_str(), "Canceled");
        assert_eq!(FlightStatus::Delayed.as_str(), "Delayed");
        assert_eq!(FlightStatus::Boarding.as_str(), "Boarding");
    }

    #[test]
    fn test_from_str_accepts_every_label() {
        for status in FlightStatus::ALL {
            assert_eq!(FlightStatus::from_str(status.as_str()), Ok(status));
        }
        assert_eq!(
            FlightStatus::from_str("EN ROUTE"),
            Ok(FlightStatus::EnRoute)
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_status() {
        assert_eq!(
            FlightStatus::from_str("landed"),
            Err(BoardError::InvalidStatus("landed".to_string()))
        );
    }
}

use std::fmt;

use chrono::NaiveDateTime;

use super::{flight::Flight, flight_status::FlightStatus, DEPARTURE_TIME_FORMAT, TBD};

/// The message a passenger receives about their flight.
///
/// Each variant is one branch of the alert policy, so the branch that was
/// taken for a flight can be inspected before it is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum PassengerAlert {
    Canceled {
        destination: String,
    },
    /// At least one of departure time or terminal is known.
    Scheduled {
        destination: String,
        departure_time: Option<NaiveDateTime>,
        terminal: Option<String>,
    },
    /// Neither departure time nor terminal is known.
    ScheduledTbd {
        destination: String,
    },
    BoardingAtTerminal {
        terminal: String,
    },
    BoardingSeeDesk,
    EnRoute {
        destination: String,
    },
    Delayed {
        destination: String,
    },
}

impl PassengerAlert {
    /// Picks the alert for `flight` from its status alone.
    pub fn for_flight(flight: &Flight, destination: &str) -> Self {
        let destination = destination.to_string();
        match flight.status {
            FlightStatus::Canceled => PassengerAlert::Canceled { destination },
            FlightStatus::Scheduled => {
                if flight.departure_time.is_some() || flight.terminal.is_some() {
                    PassengerAlert::Scheduled {
                        destination,
                        departure_time: flight.departure_time,
                        terminal: flight.terminal.clone(),
                    }
                } else {
                    PassengerAlert::ScheduledTbd { destination }
                }
            }
            FlightStatus::Boarding => match &flight.terminal {
                Some(terminal) => PassengerAlert::BoardingAtTerminal {
                    terminal: terminal.clone(),
                },
                None => PassengerAlert::BoardingSeeDesk,
            },
            FlightStatus::EnRoute => PassengerAlert::EnRoute { destination },
            FlightStatus::Delayed => PassengerAlert::Delayed { destination },
        }
    }
}

impl fmt::Display for PassengerAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerAlert::Canceled { destination } => write!(
                f,
                "We're sorry your flight to {} was cancelled, here is a $500 voucher",
                destination
            ),
            PassengerAlert::Scheduled {
                destination,
                departure_time,
                terminal,
            } => {
                let departure = departure_time
                    .map(|time| time.format(DEPARTURE_TIME_FORMAT).to_string())
                    .unwrap_or_else(|| TBD.to_string());
                write!(
                    f,
                    "Your flight to {} is scheduled to depart at: {} from terminal: {}",
                    destination,
                    departure,
                    terminal.as_deref().unwrap_or(TBD)
                )
            }
            PassengerAlert::ScheduledTbd { destination } => write!(
                f,
                "Your flight to {} is scheduled however departure time and terminal information is {}",
                destination, TBD
            ),
            PassengerAlert::BoardingAtTerminal { terminal } => write!(
                f,
                "Your flight is boarding, please head to terminal: {} immediately. The doors are closing soon",
                terminal
            ),
            PassengerAlert::BoardingSeeDesk => write!(
                f,
                "Your flight is boarding, please see nearest information desk for more details"
            ),
            PassengerAlert::EnRoute { destination } => write!(
                f,
                "Your flight is currently in route to {}, if you have missed your flight, please see nearest information desk to reschedule",
                destination
            ),
            PassengerAlert::Delayed { destination } => write!(
                f,
                "Your flight to {} is delayed, please wait for flight departure time and terminal information to update",
                destination
            ),
        }
    }
}

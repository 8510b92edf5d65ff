//! Departure board for a single airport: flight records, passenger alerts,
//! a printable board and a simple fare calculator.

pub mod config;
pub mod currency;
pub mod fare;
pub mod report;
pub mod sample;
pub mod types;

pub use config::BoardConfig;
pub use currency::{CurrencyFormatter, CurrencyLocale};
pub use fare::{compute_fare, compute_fare_with, fare_total, COST_UNKNOWN};
pub use report::{departure_lines, print_departures};
pub use types::{
    airport::Airport,
    alert::PassengerAlert,
    board_error::BoardError,
    departure_board::DepartureBoard,
    flight::{parse_departure_time, Flight},
    flight_status::FlightStatus,
};

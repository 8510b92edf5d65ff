use chrono::NaiveDateTime;

use crate::types::{airport::Airport, departure_board::DepartureBoard, flight::Flight};

/// Fixed label for the airport the board is installed at.
pub const ORIGIN_LABEL: &str = "jfkAirport";

/// Short time style used on the board, e.g. `1:26 PM`.
pub const REPORT_TIME_FORMAT: &str = "%-I:%M %p";

/// Formats a single board row. Missing values are left blank.
pub fn departure_line(flight: &Flight, airport: &Airport) -> String {
    let departure_time = flight
        .departure_time
        .as_ref()
        .map(format_short_time)
        .unwrap_or_default();
    let terminal = flight.terminal.as_deref().unwrap_or("");

    format!(
        "{} -> Destination: {} / Flight: {} / Departure Time: {} / Terminal: {} / Status: {}",
        ORIGIN_LABEL,
        airport.destination,
        flight.flight_number,
        departure_time,
        terminal,
        flight.status.as_str()
    )
}

/// Formats every flight on the board, in board order.
pub fn departure_lines(board: &DepartureBoard) -> Vec<String> {
    board
        .flights()
        .iter()
        .map(|flight| departure_line(flight, board.airport()))
        .collect()
}

/// Prints the board to stdout.
pub fn print_departures(board: &DepartureBoard) {
    for line in departure_lines(board) {
        println!("{}", line);
    }
}

fn format_short_time(time: &NaiveDateTime) -> String {
    time.format(REPORT_TIME_FORMAT).to_string()
}

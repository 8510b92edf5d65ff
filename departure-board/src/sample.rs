use crate::types::{
    airport::Airport,
    board_error::BoardError,
    departure_board::DepartureBoard,
    flight::{parse_departure_time, Flight},
    flight_status::FlightStatus,
};

/// Destination announced by the sample board.
pub const SAMPLE_DESTINATION: &str = "laxAirport";

/// Fare requests shown by the demo: (checked bags, miles, travelers).
pub const SAMPLE_FARES: [(u32, u32, u32); 5] = [
    (2, 2000, 3),
    (0, 0, 1),
    (5, 2000, 3),
    (2, 25000, 5),
    (5, 16000, 1),
];

/// The three demo flights: one boarding, one scheduled without a terminal,
/// and one canceled without a departure time.
pub fn sample_flights() -> Result<Vec<Flight>, BoardError> {
    Ok(vec![
        Flight::new(
            Some(parse_departure_time("2020/05/01 23:11")?),
            Some("5"),
            "American Airlines: AA220",
            FlightStatus::Boarding,
        ),
        Flight::new(
            Some(parse_departure_time("2020/05/02 06:20")?),
            None,
            "American Airlines: AA330",
            FlightStatus::Scheduled,
        ),
        Flight::new(
            None,
            Some("2"),
            "JetBlue Airways: JB123",
            FlightStatus::Canceled,
        ),
    ])
}

/// Builds an empty board and appends the sample flights to it.
pub fn sample_board() -> Result<DepartureBoard, BoardError> {
    let mut board = DepartureBoard::new(Vec::new(), Airport::new(SAMPLE_DESTINATION));
    board.append_all(sample_flights()?);
    Ok(board)
}

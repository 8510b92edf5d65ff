/// Format used to read and announce departure times, e.g. `2020/05/01 23:11`.
pub const DEPARTURE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Placeholder used in passenger alerts for values that are not known yet.
pub const TBD: &str = "TBD";

pub mod airport;

pub mod flight_status;

pub mod board_error;

pub mod flight;

pub mod alert;

pub mod departure_board;

use departure_board::sample::{sample_board, SAMPLE_DESTINATION};
use departure_board::{
    compute_fare, departure_lines, Airport, DepartureBoard, Flight, FlightStatus, PassengerAlert,
    COST_UNKNOWN,
};

// Renders the alerts the same way alert_passengers does, but into a buffer
fn alert_output(board: &DepartureBoard) -> Vec<String> {
    let mut out = Vec::new();
    board
        .write_alerts(&mut out)
        .expect("Failed to write alerts");
    String::from_utf8(out)
        .expect("Alerts are not valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_sample_board_report() {
    let board = sample_board().expect("Failed to build sample board");
    let lines = departure_lines(&board);

    assert_eq!(
        lines,
        vec![
            "jfkAirport -> Destination: laxAirport / Flight: American Airlines: AA220 / Departure Time: 11:11 PM / Terminal: 5 / Status: Boarding",
            "jfkAirport -> Destination: laxAirport / Flight: American Airlines: AA330 / Departure Time: 6:20 AM / Terminal:  / Status: Scheduled",
            "jfkAirport -> Destination: laxAirport / Flight: JetBlue Airways: JB123 / Departure Time:  / Terminal: 2 / Status: Canceled",
        ]
    );
}

#[test]
fn test_sample_board_alerts() {
    let board = sample_board().expect("Failed to build sample board");

    assert_eq!(
        alert_output(&board),
        vec![
            "Your flight is boarding, please head to terminal: 5 immediately. The doors are closing soon",
            "Your flight to laxAirport is scheduled to depart at: 2020/05/02 06:20 from terminal: TBD",
            "We're sorry your flight to laxAirport was cancelled, here is a $500 voucher",
        ]
    );
}

#[test]
fn test_every_status_gets_exactly_one_alert() {
    let mut board = DepartureBoard::new(Vec::new(), Airport::new(SAMPLE_DESTINATION));
    for status in FlightStatus::ALL {
        board.append(Flight::new(None, None, "XX100", status));
    }

    let alerts = board.alerts();
    assert_eq!(alerts.len(), FlightStatus::ALL.len());
    assert_eq!(
        alerts,
        vec![
            PassengerAlert::EnRoute {
                destination: SAMPLE_DESTINATION.to_string()
            },
            PassengerAlert::ScheduledTbd {
                destination: SAMPLE_DESTINATION.to_string()
            },
            PassengerAlert::Canceled {
                destination: SAMPLE_DESTINATION.to_string()
            },
            PassengerAlert::Delayed {
                destination: SAMPLE_DESTINATION.to_string()
            },
            PassengerAlert::BoardingSeeDesk,
        ]
    );

    let lines = alert_output(&board);
    assert_eq!(lines.len(), alerts.len());
    assert!(lines.iter().all(|line| !line.is_empty()));
}

#[test]
fn test_report_never_shows_missing_value_artifacts() {
    let mut board = DepartureBoard::new(Vec::new(), Airport::new(SAMPLE_DESTINATION));
    for status in FlightStatus::ALL {
        board.append(Flight::new(None, None, "XX200", status));
    }

    for line in departure_lines(&board) {
        for artifact in ["None", "Some(", "nil", "null", "Optional("] {
            assert!(!line.contains(artifact), "{} found in {}", artifact, line);
        }
        assert!(line.contains("Departure Time:  / Terminal:  / "));
    }
}

#[test]
fn test_append_preserves_order() {
    let mut board = DepartureBoard::new(Vec::new(), Airport::new(SAMPLE_DESTINATION));
    let numbers: Vec<String> = (0..10).map(|i| format!("AA{}", 100 + i)).collect();
    for number in &numbers {
        board.append(Flight::new(None, None, number, FlightStatus::Delayed));
    }

    let stored: Vec<String> = board
        .flights()
        .iter()
        .map(|f| f.flight_number.clone())
        .collect();
    assert_eq!(stored, numbers);
}

#[test]
fn test_fares() {
    assert_eq!(compute_fare(2, 2000, 3), "$750.00");
    assert_eq!(compute_fare(0, 0, 1), "$0.00");
    assert_eq!(compute_fare(1, 0, 0), COST_UNKNOWN);
}

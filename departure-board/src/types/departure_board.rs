use std::io::{self, Write};

use super::{airport::Airport, alert::PassengerAlert, flight::Flight};

/// Holds the flights departing towards one airport.
///
/// Flights keep the order in which they were appended. The airport is fixed
/// when the board is created and can't be replaced afterwards.
#[derive(Debug, Clone)]
pub struct DepartureBoard {
    departure_flights: Vec<Flight>,
    current_airport: Airport,
}

impl DepartureBoard {
    /// Creates a board with an initial, possibly empty, list of flights.
    pub fn new(departure_flights: Vec<Flight>, current_airport: Airport) -> Self {
        DepartureBoard {
            departure_flights,
            current_airport,
        }
    }

    /// Adds a flight to the end of the board.
    pub fn append(&mut self, flight: Flight) {
        self.departure_flights.push(flight);
    }

    /// Adds every flight from `flights`, in order.
    pub fn append_all(&mut self, flights: impl IntoIterator<Item = Flight>) {
        self.departure_flights.extend(flights);
    }

    pub fn flights(&self) -> &[Flight] {
        &self.departure_flights
    }

    pub fn airport(&self) -> &Airport {
        &self.current_airport
    }

    pub fn len(&self) -> usize {
        self.departure_flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departure_flights.is_empty()
    }

    /// Returns the alert for every flight, in board order.
    pub fn alerts(&self) -> Vec<PassengerAlert> {
        self.departure_flights
            .iter()
            .map(|flight| PassengerAlert::for_flight(flight, &self.current_airport.destination))
            .collect()
    }

    /// Writes one alert line per flight to `out`.
    pub fn write_alerts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for alert in self.alerts() {
            writeln!(out, "{}", alert)?;
        }
        out.flush()
    }

    /// Prints one alert line per flight to stdout.
    pub fn alert_passengers(&self) {
        for alert in self.alerts() {
            println!("{}", alert);
        }
    }
}

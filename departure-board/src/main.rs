use departure_board::{compute_fare_with, print_departures, sample, BoardConfig, CurrencyFormatter};
use logger::{Color, Logger, LoggerError};

/// Log sink for the program. Logging is skipped when the log file couldn't be opened.
struct BoardLog {
    logger: Option<Logger>,
    echo: bool,
}

impl BoardLog {
    fn open(config: &BoardConfig, board: &str) -> Self {
        let logger = match Logger::new(&config.log_dir, board) {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        };

        BoardLog {
            logger,
            echo: config.log_echo,
        }
    }

    fn info(&self, message: &str, color: Color) {
        if let Some(logger) = &self.logger {
            report_failure(logger.info(message, color, self.echo));
        }
    }

    fn warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            report_failure(logger.warn(message, self.echo));
        }
    }
}

// A failed log write must not stop the board from printing
fn report_failure(result: Result<(), LoggerError>) {
    if let Err(e) = result {
        eprintln!("Failed to write log: {}", e);
    }
}

/// Prints the sample departure board, the passenger alerts and a few fares.
///
/// # Configuration
///
/// - `DEPARTURES_LOCALE`: currency locale for fares (default `en-US`).
/// - `DEPARTURES_LOG_DIR`: directory for the log file (default `logs`).
/// - `DEPARTURES_LOG_ECHO`: set to `1` to echo log lines to stderr.
///
/// # Errors
///
/// Returns an error only if the built-in sample data is invalid.
fn main() -> Result<(), String> {
    let config = BoardConfig::from_env();
    let log = BoardLog::open(&config, sample::SAMPLE_DESTINATION);

    let (locale, locale_error) = config.currency_locale();
    if let Some(e) = locale_error {
        log.warn(&format!("{}, using {}", e, locale.code()));
    }
    let formatter = CurrencyFormatter::new(locale);

    let board = sample::sample_board().map_err(|e| e.to_string())?;
    log.info(
        &format!(
            "Board for {} created with {} flights",
            board.airport().destination,
            board.len()
        ),
        Color::Green,
    );
    for flight in board.flights() {
        log.info(
            &format!("Loaded {} ({})", flight.flight_number, flight.status),
            Color::Cyan,
        );
    }

    print_departures(&board);
    println!();

    board.alert_passengers();
    log.info(
        &format!("Alerted passengers of {} flights", board.len()),
        Color::Blue,
    );
    println!();

    for (checked_bags, distance_miles, travelers) in sample::SAMPLE_FARES {
        let fare = compute_fare_with(&formatter, checked_bags, distance_miles, travelers);
        log.info(
            &format!(
                "Fare for {} bags, {} miles, {} travelers: {}",
                checked_bags, distance_miles, travelers, fare
            ),
            Color::White,
        );
        println!("{}", fare);
    }

    Ok(())
}

use crate::currency::CurrencyFormatter;
use crate::types::board_error::BoardError;

/// Price of each checked bag, in dollars.
pub const BAG_FEE: f64 = 25.0;

/// Price of each mile flown, in dollars.
pub const COST_PER_MILE: f64 = 0.10;

/// Returned instead of a price when the fare can't be formatted.
pub const COST_UNKNOWN: &str = "Cost unknown";

/// Total fare for a group: bags and miles are charged per traveler.
pub fn fare_total(checked_bags: u32, distance_miles: u32, travelers: u32) -> f64 {
    let bag_cost = BAG_FEE * f64::from(checked_bags);
    let distance_cost = COST_PER_MILE * f64::from(distance_miles);
    (bag_cost + distance_cost) * f64::from(travelers)
}

/// Computes the fare and formats it in US dollars.
///
/// A group needs at least one traveler: `travelers == 0` yields
/// [`COST_UNKNOWN`], not `$0.00`.
pub fn compute_fare(checked_bags: u32, distance_miles: u32, travelers: u32) -> String {
    compute_fare_with(
        &CurrencyFormatter::default(),
        checked_bags,
        distance_miles,
        travelers,
    )
}

/// Computes the fare and formats it with `formatter`, falling back to
/// [`COST_UNKNOWN`] when it can't be priced or `travelers` is zero.
pub fn compute_fare_with(
    formatter: &CurrencyFormatter,
    checked_bags: u32,
    distance_miles: u32,
    travelers: u32,
) -> String {
    try_compute_fare(formatter, checked_bags, distance_miles, travelers)
        .unwrap_or_else(|_| COST_UNKNOWN.to_string())
}

fn try_compute_fare(
    formatter: &CurrencyFormatter,
    checked_bags: u32,
    distance_miles: u32,
    travelers: u32,
) -> Result<String, BoardError> {
    if travelers == 0 {
        return Err(BoardError::Other(
            "At least one traveler is required".to_string(),
        ));
    }
    formatter.format(fare_total(checked_bags, distance_miles, travelers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyLocale;

    #[test]
    fn test_fare_total() {
        assert_eq!(fare_total(2, 2000, 3), 750.0);
        assert_eq!(fare_total(0, 0, 1), 0.0);
    }

    #[test]
    fn test_compute_fare() {
        assert_eq!(compute_fare(2, 2000, 3), "$750.00");
        assert_eq!(compute_fare(0, 0, 1), "$0.00");
        assert_eq!(compute_fare(5, 2000, 3), "$975.00");
        assert_eq!(compute_fare(2, 25000, 5), "$12,750.00");
        assert_eq!(compute_fare(5, 16000, 1), "$1,725.00");
    }

    #[test]
    fn test_compute_fare_without_travelers_is_unknown() {
        assert_eq!(compute_fare(2, 2000, 0), COST_UNKNOWN);
    }

    #[test]
    fn test_compute_fare_with_locale() {
        let formatter = CurrencyFormatter::new(CurrencyLocale::DeDe);
        assert_eq!(
            compute_fare_with(&formatter, 2, 2000, 3),
            "750,00\u{00a0}\u{20ac}"
        );
    }
}

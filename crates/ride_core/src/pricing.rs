//! Simple pricing system for calculating ride fares.

/// Per-variant pricing: a flat base fare plus a per-mile rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCard {
    /// Base fare in currency units (e.g., dollars).
    pub base_fare: f64,
    /// Per-mile rate in currency units.
    pub per_mile_rate: f64,
}

/// Rates applied to standard rides.
pub const STANDARD_RATES: RateCard = RateCard {
    base_fare: 2.50,
    per_mile_rate: 1.25,
};

/// Rates applied to premium rides.
pub const PREMIUM_RATES: RateCard = RateCard {
    base_fare: 5.00,
    per_mile_rate: 2.25,
};

/// Calculate the fare for a ride of the given distance.
///
/// Formula: `fare = base_fare + (per_mile_rate * distance_miles)`
///
/// No rounding is applied here; display formatting rounds to 2 decimal
/// places at print time. Distances are accepted as-is, so a negative
/// distance produces a fare below the base fare.
pub fn calculate_fare(rates: &RateCard, distance_miles: f64) -> f64 {
    rates.base_fare + (rates.per_mile_rate * distance_miles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_includes_base_and_distance() {
        let fare = calculate_fare(&STANDARD_RATES, 4.2);
        let expected = STANDARD_RATES.base_fare + (STANDARD_RATES.per_mile_rate * 4.2);
        assert_eq!(fare, expected, "fare calculation should match formula");
        assert!(fare >= STANDARD_RATES.base_fare, "fare should be at least base fare");
    }

    #[test]
    fn premium_rides_cost_more_at_every_distance() {
        for distance in [0.0, 0.5, 4.2, 12.8, 100.0] {
            let standard = calculate_fare(&STANDARD_RATES, distance);
            let premium = calculate_fare(&PREMIUM_RATES, distance);
            assert!(premium > standard, "premium should exceed standard at {distance} miles");
        }
    }

    #[test]
    fn zero_distance_yields_base_fare() {
        assert_eq!(calculate_fare(&STANDARD_RATES, 0.0), STANDARD_RATES.base_fare);
        assert_eq!(calculate_fare(&PREMIUM_RATES, 0.0), PREMIUM_RATES.base_fare);
    }

    #[test]
    fn negative_distance_passes_through_unvalidated() {
        let fare = calculate_fare(&STANDARD_RATES, -4.0);
        assert!(fare < STANDARD_RATES.base_fare);
        assert_eq!(fare, 2.50 + (1.25 * -4.0));
    }
}

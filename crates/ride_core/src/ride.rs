//! Ride variants and the polymorphic fare/detail contract.
//!
//! Rides are shared: the same ride handle may sit in a driver's history and
//! a rider's request list at the same time, so handles are `Rc<dyn Ride>`
//! and a ride lives as long as any holder keeps it.

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::pricing::{self, RateCard, PREMIUM_RATES, STANDARD_RATES};

/// Closed set of ride variants; the variant selects the rate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideKind {
    Standard,
    Premium,
}

impl RideKind {
    /// Display label used in detail blocks and exported records.
    pub fn label(self) -> &'static str {
        match self {
            RideKind::Standard => "Standard",
            RideKind::Premium => "Premium",
        }
    }

    pub fn rates(self) -> &'static RateCard {
        match self {
            RideKind::Standard => &STANDARD_RATES,
            RideKind::Premium => &PREMIUM_RATES,
        }
    }
}

/// Shared handle to a ride.
pub type SharedRide = Rc<dyn Ride>;

/// Polymorphic ride contract: identity, route, distance, and fare.
///
/// `fare` is pure in the variant and the distance; `write_details` is the
/// only side-effecting operation and writes the full detail block.
pub trait Ride: fmt::Debug {
    fn ride_id(&self) -> u64;
    fn pickup(&self) -> &str;
    fn dropoff(&self) -> &str;
    fn distance_miles(&self) -> f64;
    fn kind(&self) -> RideKind;

    /// Fare for this ride under the variant's rate card.
    fn fare(&self) -> f64;

    /// Write the detail block: type label, identity, route, distance
    /// (2 decimals), and the formatted fare line.
    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Ride Type: {}", self.kind().label())?;
        writeln!(out, "Ride ID: {}", self.ride_id())?;
        writeln!(out, "Pickup: {}", self.pickup())?;
        writeln!(out, "Dropoff: {}", self.dropoff())?;
        writeln!(out, "Distance: {:.2} miles", self.distance_miles())?;
        writeln!(out, "Fare: ${:.2}", self.fare())
    }
}

/// Fields common to every ride variant. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
struct RideInfo {
    ride_id: u64,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
}

impl RideInfo {
    fn new(
        ride_id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            ride_id,
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
        }
    }
}

/// A standard ride: the cheapest base fare and per-mile rate.
#[derive(Debug, Clone)]
pub struct StandardRide {
    info: RideInfo,
}

impl StandardRide {
    /// No validation: a negative distance is accepted and yields a fare
    /// below the base fare.
    pub fn new(
        ride_id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            info: RideInfo::new(ride_id, pickup, dropoff, distance_miles),
        }
    }

    /// Construct directly as a shared handle.
    pub fn shared(
        ride_id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> SharedRide {
        Rc::new(Self::new(ride_id, pickup, dropoff, distance_miles))
    }
}

impl Ride for StandardRide {
    fn ride_id(&self) -> u64 {
        self.info.ride_id
    }

    fn pickup(&self) -> &str {
        &self.info.pickup
    }

    fn dropoff(&self) -> &str {
        &self.info.dropoff
    }

    fn distance_miles(&self) -> f64 {
        self.info.distance_miles
    }

    fn kind(&self) -> RideKind {
        RideKind::Standard
    }

    fn fare(&self) -> f64 {
        pricing::calculate_fare(&STANDARD_RATES, self.info.distance_miles)
    }
}

/// A premium ride: higher base fare and per-mile rate.
#[derive(Debug, Clone)]
pub struct PremiumRide {
    info: RideInfo,
}

impl PremiumRide {
    pub fn new(
        ride_id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            info: RideInfo::new(ride_id, pickup, dropoff, distance_miles),
        }
    }

    /// Construct directly as a shared handle.
    pub fn shared(
        ride_id: u64,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> SharedRide {
        Rc::new(Self::new(ride_id, pickup, dropoff, distance_miles))
    }
}

impl Ride for PremiumRide {
    fn ride_id(&self) -> u64 {
        self.info.ride_id
    }

    fn pickup(&self) -> &str {
        &self.info.pickup
    }

    fn dropoff(&self) -> &str {
        &self.info.dropoff
    }

    fn distance_miles(&self) -> f64 {
        self.info.distance_miles
    }

    fn kind(&self) -> RideKind {
        RideKind::Premium
    }

    fn fare(&self) -> f64 {
        pricing::calculate_fare(&PREMIUM_RATES, self.info.distance_miles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_details(ride: &dyn Ride) -> String {
        let mut buf = Vec::new();
        ride.write_details(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn standard_fare_matches_formula() {
        let ride = StandardRide::new(101, "Campus Library", "Downtown Plaza", 4.2);
        assert_eq!(ride.fare(), 2.50 + (1.25 * 4.2));
    }

    #[test]
    fn premium_fare_matches_formula() {
        let ride = PremiumRide::new(202, "Tech Park", "Airport Terminal", 12.8);
        assert_eq!(ride.fare(), 5.00 + (2.25 * 12.8));
    }

    #[test]
    fn fare_dispatches_through_shared_handle() {
        let rides: Vec<SharedRide> = vec![
            StandardRide::shared(1, "A", "B", 10.0),
            PremiumRide::shared(2, "A", "B", 10.0),
        ];
        assert_eq!(rides[0].fare(), 2.50 + (1.25 * 10.0));
        assert_eq!(rides[1].fare(), 5.00 + (2.25 * 10.0));
    }

    #[test]
    fn detail_block_formats_two_decimals() {
        let ride = StandardRide::new(101, "Campus Library", "Downtown Plaza", 4.2);
        let details = render_details(&ride);
        assert_eq!(
            details,
            "Ride Type: Standard\n\
             Ride ID: 101\n\
             Pickup: Campus Library\n\
             Dropoff: Downtown Plaza\n\
             Distance: 4.20 miles\n\
             Fare: $7.75\n"
        );
    }

    #[test]
    fn premium_detail_block_labels_variant_and_fare() {
        let ride = PremiumRide::new(202, "Tech Park", "Airport Terminal", 12.8);
        let details = render_details(&ride);
        assert!(details.starts_with("Ride Type: Premium\n"));
        assert!(details.ends_with("Fare: $33.80\n"));
        assert!(details.contains("Distance: 12.80 miles\n"));
    }

    #[test]
    fn kind_rates_select_the_matching_card() {
        assert_eq!(RideKind::Standard.rates().base_fare, 2.50);
        assert_eq!(RideKind::Premium.rates().per_mile_rate, 2.25);
    }
}

//! Ride records and fleet aggregates for analysis and export.

use std::io::{self, Write};

use serde::Serialize;

use crate::ride::{Ride, RideKind, SharedRide};

/// Flat row for one ride: identity, route, distance, computed fare.
#[derive(Debug, Clone, Serialize)]
pub struct RideRecord {
    pub ride_id: u64,
    pub ride_type: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub fare: f64,
}

impl RideRecord {
    pub fn from_ride(ride: &dyn Ride) -> Self {
        Self {
            ride_id: ride.ride_id(),
            ride_type: ride.kind().label().to_string(),
            pickup: ride.pickup().to_string(),
            dropoff: ride.dropoff().to_string(),
            distance_miles: ride.distance_miles(),
            fare: ride.fare(),
        }
    }
}

/// Build a record per ride, preserving order.
pub fn collect_records(rides: &[SharedRide]) -> Vec<RideRecord> {
    rides
        .iter()
        .map(|ride| RideRecord::from_ride(ride.as_ref()))
        .collect()
}

/// Aggregates over a set of ride records.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub total_rides: usize,
    pub standard_rides: usize,
    pub premium_rides: usize,
    pub total_distance_miles: f64,
    pub total_fares: f64,
    /// Mean fare; 0.0 when there are no records.
    pub average_fare: f64,
}

impl FleetSummary {
    pub fn from_records(records: &[RideRecord]) -> Self {
        let total_rides = records.len();
        let premium_rides = records
            .iter()
            .filter(|r| r.ride_type == RideKind::Premium.label())
            .count();
        let total_distance_miles: f64 = records.iter().map(|r| r.distance_miles).sum();
        let total_fares: f64 = records.iter().map(|r| r.fare).sum();
        let average_fare = if total_rides == 0 {
            0.0
        } else {
            total_fares / total_rides as f64
        };

        Self {
            total_rides,
            standard_rides: total_rides - premium_rides,
            premium_rides,
            total_distance_miles,
            total_fares,
            average_fare,
        }
    }

    /// Write the summary block used by the CLI scenario report.
    pub fn write(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Total rides: {}", self.total_rides)?;
        writeln!(out, "Standard rides: {}", self.standard_rides)?;
        writeln!(out, "Premium rides: {}", self.premium_rides)?;
        writeln!(out, "Total distance: {:.2} miles", self.total_distance_miles)?;
        writeln!(out, "Total fares: ${:.2}", self.total_fares)?;
        writeln!(out, "Average fare: ${:.2}", self.average_fare)
    }
}

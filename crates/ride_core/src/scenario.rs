//! Scenario setup: generate rides with seeded randomness over a fixed
//! location catalog, and build a demo fleet around them.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agents::{Driver, Rider};
use crate::ride::{PremiumRide, SharedRide, StandardRide};

/// Pickup/dropoff labels sampled by the generator.
const LOCATIONS: &[&str] = &[
    "Campus Library",
    "Downtown Plaza",
    "Tech Park",
    "Airport Terminal",
    "Riverside Market",
    "Union Station",
    "Harbor Point",
    "Museum District",
    "Stadium Gate B",
    "Old Town Square",
];

/// First generated ride id; ids are sequential from here.
const FIRST_RIDE_ID: u64 = 101;

/// Parameters for building a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub num_rides: usize,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
    /// Trip distance range in miles (uniform).
    pub min_distance_miles: f64,
    pub max_distance_miles: f64,
    /// Probability a generated ride is premium (0.0–1.0).
    pub premium_share: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_rides: 8,
            seed: None,
            min_distance_miles: 1.0,
            max_distance_miles: 25.0,
            premium_share: 0.3,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Trip distance range in miles: min..=max (uniform).
    pub fn with_distance_range(mut self, min_miles: f64, max_miles: f64) -> Self {
        self.min_distance_miles = min_miles;
        self.max_distance_miles = max_miles;
        self
    }

    /// Probability a generated ride is premium (clamped to 0.0–1.0 at use).
    pub fn with_premium_share(mut self, share: f64) -> Self {
        self.premium_share = share;
        self
    }
}

/// Generate rides from the params. The same seed produces the same rides.
///
/// Ride ids are sequential from 101; pickup and dropoff are distinct labels
/// from the location catalog; distance is uniform in the configured range.
pub fn generate_rides(params: &ScenarioParams) -> Vec<SharedRide> {
    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let min_miles = params.min_distance_miles;
    let max_miles = params.max_distance_miles.max(min_miles);
    let premium_share = params.premium_share.clamp(0.0, 1.0);

    let mut rides: Vec<SharedRide> = Vec::with_capacity(params.num_rides);
    for i in 0..params.num_rides {
        let ride_id = FIRST_RIDE_ID + i as u64;
        let pickup_idx = rng.gen_range(0..LOCATIONS.len());
        // Non-zero offset keeps the dropoff distinct from the pickup.
        let offset = rng.gen_range(1..LOCATIONS.len());
        let dropoff_idx = (pickup_idx + offset) % LOCATIONS.len();
        let distance_miles = rng.gen_range(min_miles..=max_miles);

        let ride: SharedRide = if rng.gen_bool(premium_share) {
            PremiumRide::shared(
                ride_id,
                LOCATIONS[pickup_idx],
                LOCATIONS[dropoff_idx],
                distance_miles,
            )
        } else {
            StandardRide::shared(
                ride_id,
                LOCATIONS[pickup_idx],
                LOCATIONS[dropoff_idx],
                distance_miles,
            )
        };
        rides.push(ride);
    }
    rides
}

/// Demo fleet around a set of rides: one driver assigned every ride, one
/// rider who requested the first ride only (mirrors the fixed demo script).
pub fn build_demo_fleet(rides: &[SharedRide]) -> (Driver, Rider) {
    let mut driver = Driver::new(11, "Jordan Lee", 4.9);
    for ride in rides {
        driver.assign_ride(Rc::clone(ride));
    }

    let mut rider = Rider::new(501, "Avery Patel");
    if let Some(first) = rides.first() {
        rider.request_ride(Rc::clone(first));
    }

    (driver, rider)
}

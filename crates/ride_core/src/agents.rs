//! Drivers and riders: agents that accumulate shared ride handles.
//!
//! Both collections are append-only and keep insertion order. No exclusivity
//! is enforced between them; a ride assigned to a driver may also appear in
//! a rider's request list.

use std::io::{self, Write};

use crate::ride::SharedRide;

/// A driver with an append-only history of assigned rides.
#[derive(Debug, Clone)]
pub struct Driver {
    driver_id: u64,
    name: String,
    rating: f64,
    assigned_rides: Vec<SharedRide>,
}

impl Driver {
    /// No validation: the rating is conventionally 0–5 but unenforced.
    pub fn new(driver_id: u64, name: impl Into<String>, rating: f64) -> Self {
        Self {
            driver_id,
            name: name.into(),
            rating,
            assigned_rides: Vec::new(),
        }
    }

    pub fn driver_id(&self) -> u64 {
        self.driver_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Append a ride to the history. No duplicate check, no capacity limit.
    pub fn assign_ride(&mut self, ride: SharedRide) {
        self.assigned_rides.push(ride);
    }

    pub fn assigned_ride_count(&self) -> usize {
        self.assigned_rides.len()
    }

    /// Assigned rides in assignment order.
    pub fn assigned_rides(&self) -> &[SharedRide] {
        &self.assigned_rides
    }

    /// Write the driver summary: identity, rating (1 decimal), ride count.
    pub fn write_info(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Driver ID: {}", self.driver_id)?;
        writeln!(out, "Name: {}", self.name)?;
        writeln!(out, "Rating: {:.1}", self.rating)?;
        writeln!(out, "Assigned rides: {}", self.assigned_rides.len())
    }

    /// Write every assigned ride's detail block in assignment order, each
    /// preceded by a blank line. An empty history writes a fixed message.
    pub fn write_ride_history(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.assigned_rides.is_empty() {
            return writeln!(out, "No rides assigned.");
        }

        for ride in &self.assigned_rides {
            writeln!(out)?;
            ride.write_details(out)?;
        }
        Ok(())
    }
}

/// A rider with an append-only list of requested rides.
#[derive(Debug, Clone)]
pub struct Rider {
    rider_id: u64,
    name: String,
    requested_rides: Vec<SharedRide>,
}

impl Rider {
    pub fn new(rider_id: u64, name: impl Into<String>) -> Self {
        Self {
            rider_id,
            name: name.into(),
            requested_rides: Vec::new(),
        }
    }

    pub fn rider_id(&self) -> u64 {
        self.rider_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a ride to the request list.
    pub fn request_ride(&mut self, ride: SharedRide) {
        self.requested_rides.push(ride);
    }

    pub fn requested_ride_count(&self) -> usize {
        self.requested_rides.len()
    }

    /// Requested rides in request order.
    pub fn requested_rides(&self) -> &[SharedRide] {
        &self.requested_rides
    }

    /// Write the rider's identity, then each requested ride's detail block
    /// preceded by a blank line. An empty list writes a fixed message.
    pub fn write_rides(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Rider ID: {}", self.rider_id)?;
        writeln!(out, "Name: {}", self.name)?;

        if self.requested_rides.is_empty() {
            return writeln!(out, "No rides requested.");
        }

        for ride in &self.requested_rides {
            writeln!(out)?;
            ride.write_details(out)?;
        }
        Ok(())
    }
}

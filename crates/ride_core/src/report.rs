//! Fixed demo report: builds two rides, one driver, and one rider, then
//! writes a byte-deterministic sequence of console sections.
//!
//! No input is read and no branching happens here; given the fixed
//! formatting the output is identical on every run.

use std::io::{self, Write};
use std::rc::Rc;

use crate::agents::{Driver, Rider};
use crate::ride::{PremiumRide, SharedRide, StandardRide};

/// The two fixed demo rides: one standard (id 101), one premium (id 202).
pub fn demo_rides() -> Vec<SharedRide> {
    vec![
        StandardRide::shared(101, "Campus Library", "Downtown Plaza", 4.2),
        PremiumRide::shared(202, "Tech Park", "Airport Terminal", 12.8),
    ]
}

/// Write the full demo script: polymorphic ride details, driver info and
/// ride history, then the rider's view of the first ride.
pub fn write_demo_report(out: &mut dyn Write) -> io::Result<()> {
    let rides = demo_rides();

    writeln!(out, "--- Ride Details (Polymorphic Calls) ---")?;
    for ride in &rides {
        ride.write_details(out)?;
        writeln!(out)?;
    }

    let mut driver = Driver::new(11, "Jordan Lee", 4.9);
    for ride in &rides {
        driver.assign_ride(Rc::clone(ride));
    }

    writeln!(out, "\n--- Driver Info ---")?;
    driver.write_info(out)?;
    writeln!(out, "\n\n--- Driver Ride History ---")?;
    driver.write_ride_history(out)?;

    let mut rider = Rider::new(501, "Avery Patel");
    rider.request_ride(Rc::clone(&rides[0]));

    writeln!(out, "\n\n--- Rider Ride History ---")?;
    rider.write_rides(out)?;

    Ok(())
}

/// Write the demo report straight to stdout.
pub fn print_demo_report() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo_report(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ride::Ride;

    fn render_report() -> String {
        let mut buf = Vec::new();
        write_demo_report(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn demo_rides_are_the_fixed_pair() {
        let rides = demo_rides();
        assert_eq!(rides.len(), 2);
        assert_eq!(rides[0].ride_id(), 101);
        assert_eq!(rides[1].ride_id(), 202);
        assert_eq!(rides[0].fare(), 2.50 + (1.25 * 4.2));
        assert_eq!(rides[1].fare(), 5.00 + (2.25 * 12.8));
    }

    #[test]
    fn report_sections_appear_in_order() {
        let report = render_report();
        let ride_details = report
            .find("--- Ride Details (Polymorphic Calls) ---")
            .expect("ride details header");
        let driver_info = report.find("--- Driver Info ---").expect("driver info header");
        let history = report
            .find("--- Driver Ride History ---")
            .expect("history header");
        let rider_view = report
            .find("--- Rider Ride History ---")
            .expect("rider header");

        assert!(ride_details < driver_info);
        assert!(driver_info < history);
        assert!(history < rider_view);
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(render_report(), render_report());
    }

    #[test]
    fn rider_section_contains_only_the_first_ride() {
        let report = render_report();
        let rider_section = &report[report.find("--- Rider Ride History ---").expect("header")..];
        assert_eq!(rider_section.matches("Ride Type:").count(), 1);
        assert!(rider_section.contains("Ride ID: 101\n"));
        assert!(!rider_section.contains("Ride ID: 202"));
    }
}

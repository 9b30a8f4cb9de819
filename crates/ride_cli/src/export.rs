//! Ride record export to CSV and JSON.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use ride_core::summary::RideRecord;

fn ensure_not_empty(records: &[RideRecord]) -> Result<(), Box<dyn Error>> {
    if records.is_empty() {
        return Err("No rides to export".into());
    }
    Ok(())
}

fn create_output_file(path: impl AsRef<Path>) -> Result<File, Box<dyn Error>> {
    Ok(File::create(path)?)
}

/// Export ride records to CSV with a fixed header row.
///
/// # Errors
///
/// Returns an error if there are no records to export, or if file creation
/// or CSV writing fails.
pub fn export_to_csv(records: &[RideRecord], path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    ensure_not_empty(records)?;
    let file = create_output_file(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "ride_id",
        "ride_type",
        "pickup",
        "dropoff",
        "distance_miles",
        "fare",
    ])?;

    for record in records {
        wtr.write_record([
            record.ride_id.to_string(),
            record.ride_type.clone(),
            record.pickup.clone(),
            record.dropoff.clone(),
            record.distance_miles.to_string(),
            record.fare.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export ride records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if there are no records to export, or if file creation
/// or JSON serialization fails.
pub fn export_to_json(
    records: &[RideRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    ensure_not_empty(records)?;
    let file = create_output_file(path)?;
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}

//! CSV export for the per-appliance energy breakdown.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::load::EnergyProfile;

/// Schema v1 column header for breakdown CSV export.
const HEADER: &str = "name,power_watts,hours_per_day,quantity,priority,daily_kwh";

/// Exports an energy profile's breakdown to a CSV file at the given path.
///
/// Writes a header row followed by one data row per appliance in
/// submission order. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(profile: &EnergyProfile, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(profile, buf)
}

/// Writes an energy profile's breakdown as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(profile: &EnergyProfile, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for load in &profile.breakdown {
        let e = &load.entry;
        wtr.write_record(&[
            e.name.clone(),
            format!("{:.1}", e.power_watts),
            format!("{:.2}", e.hours_per_day),
            e.quantity.to_string(),
            e.priority.to_string(),
            format!("{:.4}", load.daily_kwh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

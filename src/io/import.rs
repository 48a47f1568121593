//! CSV import for appliance entries.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::SizingError;
use crate::load::ApplianceEntry;

/// Reads appliance entries from a CSV file.
///
/// Expects a header row with the columns
/// `name,power_watts,hours_per_day,quantity,priority` (priority one of
/// `high`, `medium`, `low`). Entries are validated as they are read.
///
/// # Errors
///
/// Returns `InvalidInput` if the file cannot be read, a row fails to
/// parse, or an entry violates its field constraints.
pub fn read_entries_csv(path: &Path) -> Result<Vec<ApplianceEntry>, SizingError> {
    let file = File::open(path).map_err(|e| SizingError::InvalidInput {
        field: "appliances".to_string(),
        message: format!("cannot read \"{}\": {e}", path.display()),
    })?;
    read_entries(file)
}

/// Reads appliance entries as CSV from any reader.
///
/// # Errors
///
/// Returns `InvalidInput` on parse failures or constraint violations,
/// naming the offending row.
pub fn read_entries(reader: impl Read) -> Result<Vec<ApplianceEntry>, SizingError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for (i, row) in rdr.deserialize::<ApplianceEntry>().enumerate() {
        let entry = row.map_err(|e| SizingError::InvalidInput {
            field: format!("entries[{i}]"),
            message: e.to_string(),
        })?;
        entry.validate(&format!("entries[{i}]"))?;
        entries.push(entry);
    }

    Ok(entries)
}

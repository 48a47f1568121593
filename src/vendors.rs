//! Append-only vendor directory with location and system-type lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SizingError;

/// Kind of solar installation a vendor supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    Residential,
    Commercial,
    OffGrid,
    Hybrid,
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::OffGrid => "off_grid",
            Self::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

/// One vendor registration. Never mutated or deleted once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Business name.
    pub name: String,
    /// City or region served.
    pub location: String,
    /// System types the vendor installs.
    pub system_types: Vec<SystemType>,
    /// Contact details (phone or email).
    pub contact: String,
}

/// In-memory, append-only collection of vendor records.
///
/// Owned explicitly by the hosting process and injected where needed —
/// there is no ambient or static directory state. Records are returned in
/// append order.
#[derive(Debug, Clone, Default)]
pub struct VendorDirectory {
    records: Vec<VendorRecord>,
}

impl VendorDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with a small starter set of vendors.
    pub fn with_starter_vendors() -> Self {
        let mut dir = Self::new();
        let starters = [
            ("SolarMax Nigeria", "Lagos", vec![SystemType::Residential], "08012345678"),
            ("GreenTech Solar", "Lagos", vec![SystemType::Commercial], "08087654321"),
            (
                "PowerGen Solutions",
                "Lagos",
                vec![SystemType::Hybrid, SystemType::Residential],
                "08011223344",
            ),
            ("Capital Solar", "Abuja", vec![SystemType::Residential], "08055667788"),
            (
                "Sunrise Energy",
                "Abuja",
                vec![SystemType::OffGrid, SystemType::Residential],
                "08033445566",
            ),
            ("Northern Solar", "Kano", vec![SystemType::Commercial], "08077889900"),
            ("Sahel Power", "Kano", vec![SystemType::Residential], "08044556677"),
        ];
        for (name, location, system_types, contact) in starters {
            // Starter data has no duplicates; a failure here is a bug.
            let record = VendorRecord {
                name: name.to_string(),
                location: location.to_string(),
                system_types,
                contact: contact.to_string(),
            };
            let _ = dir.register(record);
        }
        dir
    }

    /// Appends a new vendor record.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVendor` if a record with the same name and
    /// location (compared case-insensitively) already exists.
    pub fn register(&mut self, record: VendorRecord) -> Result<(), SizingError> {
        let exists = self.records.iter().any(|r| {
            r.name.eq_ignore_ascii_case(&record.name)
                && r.location.eq_ignore_ascii_case(&record.location)
        });
        if exists {
            return Err(SizingError::DuplicateVendor {
                name: record.name,
                location: record.location,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Returns vendors matching a location and, optionally, a system type.
    ///
    /// Location matching is a case-insensitive substring test ("Lagos"
    /// matches "lagos island"); an empty location matches every record.
    /// An empty result is not an error.
    pub fn find(&self, location: &str, system_type: Option<SystemType>) -> Vec<&VendorRecord> {
        let needle = location.to_ascii_lowercase();
        self.records
            .iter()
            .filter(|r| r.location.to_ascii_lowercase().contains(&needle))
            .filter(|r| system_type.is_none_or(|t| r.system_types.contains(&t)))
            .collect()
    }

    /// All records in append order.
    pub fn all(&self) -> &[VendorRecord] {
        &self.records
    }

    /// Number of registered vendors.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

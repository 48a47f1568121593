//! Domain errors returned by the calculator, sizer, optimizer, and directory.

use std::error::Error;
use std::fmt;

/// Error returned by any core operation.
///
/// All errors are reported synchronously to the caller; the core never
/// retries or logs. An undersized SKU catalog is surfaced as a flag on
/// [`crate::sizing::SolarSpec`] rather than an error, since the sizer still
/// produces a usable (largest-available) recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingError {
    /// Malformed appliance input: non-positive power, out-of-range hours,
    /// or zero quantity.
    InvalidInput {
        /// Dotted field path (e.g., `"entries[2].power_watts"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
    /// Configuration constants that make the sizing formulas undefined,
    /// such as a non-positive irradiance or efficiency.
    InvalidConfig {
        /// Dotted field path (e.g., `"system.efficiency"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
    /// A vendor with the same (name, location) pair is already registered.
    DuplicateVendor {
        /// Vendor business name.
        name: String,
        /// Vendor location.
        location: String,
    },
}

impl fmt::Display for SizingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "invalid input: {field} — {message}")
            }
            Self::InvalidConfig { field, message } => {
                write!(f, "invalid config: {field} — {message}")
            }
            Self::DuplicateVendor { name, location } => {
                write!(f, "duplicate vendor: \"{name}\" in \"{location}\" is already registered")
            }
        }
    }
}

impl Error for SizingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_path() {
        let e = SizingError::InvalidInput {
            field: "entries[0].power_watts".to_string(),
            message: "must be > 0".to_string(),
        };
        let s = format!("{e}");
        assert!(s.contains("entries[0].power_watts"));
        assert!(s.contains("must be > 0"));
    }

    #[test]
    fn display_duplicate_vendor() {
        let e = SizingError::DuplicateVendor {
            name: "SolarMax".to_string(),
            location: "Lagos".to_string(),
        };
        assert!(format!("{e}").contains("already registered"));
    }
}

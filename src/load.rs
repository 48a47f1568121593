//! Appliance entries and daily/monthly energy profile derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SizingError;

/// Fixed month-length convention for monthly energy totals.
pub const DAYS_PER_MONTH: f32 = 30.0;

/// Appliance priority tag used by the load optimizer.
///
/// Declaration order defines rank: `High` sorts before `Medium` sorts
/// before `Low` under the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must-run loads (refrigeration, lighting, security).
    #[serde(alias = "High")]
    High,
    /// Comfort loads worth funding once essentials are covered.
    #[serde(alias = "Medium")]
    Medium,
    /// Deferrable convenience loads.
    #[serde(alias = "Low")]
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

/// One appliance line item as submitted for a calculation pass.
///
/// Immutable once submitted; validation happens when a profile is derived,
/// so entries deserialized from CSV or JSON cannot bypass the constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    /// Appliance name.
    pub name: String,
    /// Rated power draw (W, must be > 0).
    pub power_watts: f32,
    /// Daily usage (hours, 0–24).
    pub hours_per_day: f32,
    /// Number of identical units (must be >= 1).
    pub quantity: u32,
    /// Priority tag for budget optimization.
    pub priority: Priority,
}

impl ApplianceEntry {
    /// Creates a validated entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if power is non-positive, hours fall outside
    /// [0, 24], or quantity is zero.
    pub fn new(
        name: impl Into<String>,
        power_watts: f32,
        hours_per_day: f32,
        quantity: u32,
        priority: Priority,
    ) -> Result<Self, SizingError> {
        let entry = Self {
            name: name.into(),
            power_watts,
            hours_per_day,
            quantity,
            priority,
        };
        entry.validate("entry")?;
        Ok(entry)
    }

    /// Checks field constraints, reporting violations under `field_prefix`.
    pub fn validate(&self, field_prefix: &str) -> Result<(), SizingError> {
        if !(self.power_watts > 0.0) {
            return Err(SizingError::InvalidInput {
                field: format!("{field_prefix}.power_watts"),
                message: format!("must be > 0, got {}", self.power_watts),
            });
        }
        if !(0.0..=24.0).contains(&self.hours_per_day) {
            return Err(SizingError::InvalidInput {
                field: format!("{field_prefix}.hours_per_day"),
                message: format!("must be in [0, 24], got {}", self.hours_per_day),
            });
        }
        if self.quantity == 0 {
            return Err(SizingError::InvalidInput {
                field: format!("{field_prefix}.quantity"),
                message: "must be >= 1".to_string(),
            });
        }
        Ok(())
    }

    /// Daily energy consumed by all units of this appliance (kWh).
    pub fn daily_kwh(&self) -> f32 {
        self.power_watts * self.hours_per_day * self.quantity as f32 / 1000.0
    }
}

/// One appliance entry paired with its computed daily energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceLoad {
    /// The submitted entry.
    pub entry: ApplianceEntry,
    /// Daily energy for all units (kWh).
    pub daily_kwh: f32,
}

/// Derived daily and monthly energy totals with a per-appliance breakdown.
///
/// Recomputed whenever inputs change; holds no independent state.
/// `daily_kwh` is the sum of `power_watts × hours_per_day × quantity / 1000`
/// over all entries, and `monthly_kwh` is exactly `daily_kwh × 30`.
#[derive(Debug, Clone, Serialize)]
pub struct EnergyProfile {
    /// Total daily energy consumption (kWh).
    pub daily_kwh: f32,
    /// Total monthly energy consumption (kWh, fixed 30-day month).
    pub monthly_kwh: f32,
    /// Per-appliance breakdown in submission order.
    pub breakdown: Vec<ApplianceLoad>,
}

impl EnergyProfile {
    /// Derives a profile from an ordered sequence of appliance entries.
    ///
    /// Pure and deterministic; entry order affects only the breakdown
    /// order, never the totals.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending entry and field.
    pub fn from_entries(entries: &[ApplianceEntry]) -> Result<Self, SizingError> {
        let mut breakdown = Vec::with_capacity(entries.len());
        let mut daily_kwh = 0.0_f32;

        for (i, entry) in entries.iter().enumerate() {
            entry.validate(&format!("entries[{i}]"))?;
            let kwh = entry.daily_kwh();
            daily_kwh += kwh;
            breakdown.push(ApplianceLoad {
                entry: entry.clone(),
                daily_kwh: kwh,
            });
        }

        Ok(Self {
            daily_kwh,
            monthly_kwh: daily_kwh * DAYS_PER_MONTH,
            breakdown,
        })
    }
}

impl fmt::Display for EnergyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Load Summary ---")?;
        writeln!(
            f,
            "{:<28} {:>8} {:>6} {:>8} {:>10} {:>8}",
            "Appliance", "Power W", "Qty", "Hrs/day", "Daily kWh", "Priority"
        )?;
        for load in &self.breakdown {
            let e = &load.entry;
            writeln!(
                f,
                "{:<28} {:>8.0} {:>6} {:>8.2} {:>10.3} {:>8}",
                e.name, e.power_watts, e.quantity, e.hours_per_day, load.daily_kwh, e.priority
            )?;
        }
        writeln!(f, "Daily energy:   {:.2} kWh", self.daily_kwh)?;
        write!(f, "Monthly energy: {:.1} kWh", self.monthly_kwh)
    }
}

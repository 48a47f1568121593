//! Static reference catalog of common household appliances.

use crate::load::{ApplianceEntry, Priority};

/// Typical wattage, daily usage, and priority for a common appliance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogAppliance {
    /// Reference name.
    pub name: &'static str,
    /// Typical rated power (W).
    pub power_watts: f32,
    /// Typical daily usage (hours).
    pub default_hours: f32,
    /// Default priority tag.
    pub default_priority: Priority,
}

/// Common appliances with typical power consumption figures.
pub const APPLIANCES: &[CatalogAppliance] = &[
    appliance("Refrigerator (Energy Efficient)", 150.0, 24.0, Priority::High),
    appliance("Refrigerator (Standard)", 300.0, 24.0, Priority::High),
    appliance("Air Conditioner (1HP)", 746.0, 8.0, Priority::Medium),
    appliance("Air Conditioner (1.5HP)", 1119.0, 8.0, Priority::Medium),
    appliance("Air Conditioner (2HP)", 1492.0, 8.0, Priority::Low),
    appliance("LED TV (32 inch)", 60.0, 6.0, Priority::Medium),
    appliance("LED TV (55 inch)", 120.0, 6.0, Priority::Medium),
    appliance("Ceiling Fan", 75.0, 12.0, Priority::High),
    appliance("LED Bulb (12W)", 12.0, 8.0, Priority::High),
    appliance("Fluorescent Tube", 40.0, 8.0, Priority::Medium),
    appliance("Laptop", 65.0, 8.0, Priority::High),
    appliance("Desktop Computer", 200.0, 8.0, Priority::Medium),
    appliance("Washing Machine", 500.0, 1.0, Priority::Medium),
    appliance("Microwave", 1000.0, 0.5, Priority::Low),
    appliance("Electric Kettle", 1500.0, 0.25, Priority::Low),
    appliance("Iron", 1200.0, 1.0, Priority::Low),
    appliance("Water Pump", 750.0, 2.0, Priority::High),
    appliance("Security System", 50.0, 24.0, Priority::High),
    appliance("Phone Charger", 10.0, 3.0, Priority::High),
    appliance("Router/WiFi", 20.0, 24.0, Priority::High),
];

const fn appliance(
    name: &'static str,
    power_watts: f32,
    default_hours: f32,
    default_priority: Priority,
) -> CatalogAppliance {
    CatalogAppliance {
        name,
        power_watts,
        default_hours,
        default_priority,
    }
}

/// Looks up a catalog appliance by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static CatalogAppliance> {
    APPLIANCES.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}

/// Builds an entry from a catalog appliance with its default hours and
/// priority. Returns `None` for names not in the catalog.
pub fn entry_from_catalog(name: &str, quantity: u32) -> Option<ApplianceEntry> {
    let a = lookup(name)?;
    ApplianceEntry::new(
        a.name,
        a.power_watts,
        a.default_hours,
        quantity,
        a.default_priority,
    )
    .ok()
}

/// A representative household bundle, used when the CLI is run without
/// an appliance list.
pub fn demo_household() -> Vec<ApplianceEntry> {
    [
        ("Refrigerator (Energy Efficient)", 1),
        ("Ceiling Fan", 2),
        ("LED Bulb (12W)", 6),
        ("LED TV (32 inch)", 1),
        ("Laptop", 1),
        ("Phone Charger", 2),
        ("Router/WiFi", 1),
    ]
    .into_iter()
    .filter_map(|(name, qty)| entry_from_catalog(name, qty))
    .collect()
}

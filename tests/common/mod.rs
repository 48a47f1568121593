//! Shared fixtures for integration tests.

use solarsize::config::SizingConfig;
use solarsize::load::{ApplianceEntry, Priority};

/// The worked-example entry list: 3.84 kWh/day, 115.2 kWh/month.
pub fn worked_example_entries() -> Vec<ApplianceEntry> {
    vec![
        ApplianceEntry::new("Fridge", 150.0, 24.0, 1, Priority::High).expect("valid entry"),
        ApplianceEntry::new("Bulb", 10.0, 6.0, 4, Priority::Medium).expect("valid entry"),
    ]
}

/// Config matching the worked example: irradiance 5.0, efficiency 0.75.
pub fn example_config() -> SizingConfig {
    let mut cfg = SizingConfig::lagos();
    cfg.system.irradiance_kwh_m2_day = 5.0;
    cfg.system.efficiency = 0.75;
    cfg
}

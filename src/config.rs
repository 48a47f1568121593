//! TOML-based sizing configuration and regional preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level sizing configuration parsed from TOML.
///
/// All fields have defaults matching the Lagos baseline. Load from TOML
/// with [`SizingConfig::from_toml_file`] or use [`SizingConfig::lagos`]
/// for the built-in default. All sizing behavior is a pure function of
/// this struct plus the appliance inputs — no hidden environment coupling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizingConfig {
    /// Environmental and system constants.
    pub system: SystemConfig,
    /// Cost model constants.
    pub costs: CostConfig,
    /// Available panel SKUs, ordered by rated capacity ascending.
    pub panel_catalog: Vec<PanelSku>,
    /// Available battery SKUs, ordered by rated capacity ascending.
    pub battery_catalog: Vec<BatterySku>,
}

/// Environmental and system constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Average daily solar irradiance (kWh/m²/day, must be > 0).
    pub irradiance_kwh_m2_day: f32,
    /// Overall system efficiency accounting for inverter and wiring
    /// losses (0.0–1.0, must be > 0).
    pub efficiency: f32,
    /// Days the battery must carry the load without solar input (>= 1).
    pub autonomy_days: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            irradiance_kwh_m2_day: 4.5,
            efficiency: 0.85,
            autonomy_days: 2,
        }
    }
}

/// Cost model constants. Amounts are in a single implied currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Installed panel cost per kWp.
    pub cost_per_kwp: f32,
    /// Inverter cost per kWp of panel capacity.
    pub inverter_cost_per_kwp: f32,
    /// Battery cost per kWh of storage.
    pub battery_cost_per_kwh: f32,
    /// Installation labor as a fraction of panel cost.
    pub installation_fraction: f32,
    /// Grid/generator energy price per kWh, the savings baseline.
    pub grid_cost_per_kwh: f32,
    /// Planning horizon for savings estimates (months, >= 1).
    pub plan_horizon_months: u32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            cost_per_kwp: 300_000.0,
            inverter_cost_per_kwp: 200_000.0,
            battery_cost_per_kwh: 150_000.0,
            installation_fraction: 0.3,
            grid_cost_per_kwh: 100.0,
            plan_horizon_months: 240,
        }
    }
}

/// A solar panel array product with a fixed rated capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSku {
    /// Catalog item name.
    pub name: String,
    /// Rated capacity under standard conditions (kWp, must be > 0).
    pub kwp_rating: f32,
}

/// A battery storage product with a fixed rated capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySku {
    /// Catalog item name.
    pub name: String,
    /// Rated storage capacity (kWh, must be > 0).
    pub kwh_rating: f32,
}

fn default_panel_catalog() -> Vec<PanelSku> {
    [
        ("Mono 1.0 kWp array", 1.0),
        ("Mono 1.6 kWp array", 1.6),
        ("Mono 2.5 kWp array", 2.5),
        ("Mono 4.0 kWp array", 4.0),
        ("Poly 6.0 kWp array", 6.0),
        ("Poly 8.0 kWp array", 8.0),
    ]
    .into_iter()
    .map(|(name, kwp_rating)| PanelSku {
        name: name.to_string(),
        kwp_rating,
    })
    .collect()
}

fn default_battery_catalog() -> Vec<BatterySku> {
    [
        ("LFP 2.4 kWh", 2.4),
        ("LFP 4.8 kWh", 4.8),
        ("LFP 7.2 kWh", 7.2),
        ("LFP 9.6 kWh", 9.6),
        ("LFP 14.4 kWh", 14.4),
        ("LFP 19.2 kWh", 19.2),
    ]
    .into_iter()
    .map(|(name, kwh_rating)| BatterySku {
        name: name.to_string(),
        kwh_rating,
    })
    .collect()
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::lagos()
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"system.efficiency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl SizingConfig {
    /// Returns the Lagos baseline (4.5 kWh/m²/day irradiance).
    pub fn lagos() -> Self {
        Self {
            system: SystemConfig::default(),
            costs: CostConfig::default(),
            panel_catalog: default_panel_catalog(),
            battery_catalog: default_battery_catalog(),
        }
    }

    /// Returns the Abuja preset (5.2 kWh/m²/day irradiance).
    pub fn abuja() -> Self {
        Self {
            system: SystemConfig {
                irradiance_kwh_m2_day: 5.2,
                ..SystemConfig::default()
            },
            ..Self::lagos()
        }
    }

    /// Returns the Kano preset: high irradiance, longer autonomy for the
    /// harmattan season.
    pub fn kano() -> Self {
        Self {
            system: SystemConfig {
                irradiance_kwh_m2_day: 5.8,
                autonomy_days: 3,
                ..SystemConfig::default()
            },
            ..Self::lagos()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["lagos", "abuja", "kano"];

    /// Loads a configuration from a named regional preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "lagos" => Ok(Self::lagos()),
            "abuja" => Ok(Self::abuja()),
            "kano" => Ok(Self::kano()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.system;

        if s.irradiance_kwh_m2_day <= 0.0 {
            errors.push(ConfigError {
                field: "system.irradiance_kwh_m2_day".into(),
                message: "must be > 0".into(),
            });
        }
        if !(s.efficiency > 0.0 && s.efficiency <= 1.0) {
            errors.push(ConfigError {
                field: "system.efficiency".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if s.autonomy_days == 0 {
            errors.push(ConfigError {
                field: "system.autonomy_days".into(),
                message: "must be >= 1".into(),
            });
        }

        let c = &self.costs;
        if c.cost_per_kwp <= 0.0 {
            errors.push(ConfigError {
                field: "costs.cost_per_kwp".into(),
                message: "must be > 0".into(),
            });
        }
        if c.inverter_cost_per_kwp < 0.0 {
            errors.push(ConfigError {
                field: "costs.inverter_cost_per_kwp".into(),
                message: "must be >= 0".into(),
            });
        }
        if c.battery_cost_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "costs.battery_cost_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if c.installation_fraction < 0.0 {
            errors.push(ConfigError {
                field: "costs.installation_fraction".into(),
                message: "must be >= 0".into(),
            });
        }
        if c.grid_cost_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "costs.grid_cost_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if c.plan_horizon_months == 0 {
            errors.push(ConfigError {
                field: "costs.plan_horizon_months".into(),
                message: "must be >= 1".into(),
            });
        }

        if self.panel_catalog.is_empty() {
            errors.push(ConfigError {
                field: "panel_catalog".into(),
                message: "must list at least one SKU".into(),
            });
        }
        for (i, sku) in self.panel_catalog.iter().enumerate() {
            if sku.kwp_rating <= 0.0 {
                errors.push(ConfigError {
                    field: format!("panel_catalog[{i}].kwp_rating"),
                    message: "must be > 0".into(),
                });
            }
        }

        if self.battery_catalog.is_empty() {
            errors.push(ConfigError {
                field: "battery_catalog".into(),
                message: "must list at least one SKU".into(),
            });
        }
        for (i, sku) in self.battery_catalog.iter().enumerate() {
            if sku.kwh_rating <= 0.0 {
                errors.push(ConfigError {
                    field: format!("battery_catalog[{i}].kwh_rating"),
                    message: "must be > 0".into(),
                });
            }
        }

        errors
    }
}

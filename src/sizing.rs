//! Solar panel and battery sizing from a daily energy total.

use std::fmt;

use serde::Serialize;

use crate::config::{BatterySku, PanelSku, SizingConfig};
use crate::error::SizingError;
use crate::load::DAYS_PER_MONTH;

/// Recommended system sizing derived from a daily energy total and the
/// configured environmental constants.
///
/// Pure function of its inputs: identical `daily_kwh` and config always
/// produce an identical spec. All capacity figures are non-negative.
#[derive(Debug, Clone, Serialize)]
pub struct SolarSpec {
    /// Daily energy the system must supply (kWh).
    pub daily_kwh: f32,
    /// Required panel capacity (kWp): `daily_kwh / (irradiance × efficiency)`.
    pub required_kwp: f32,
    /// Required battery capacity (kWh): `daily_kwh × autonomy_days`.
    pub battery_kwh: f32,
    /// Days of battery backup the system was sized for.
    pub autonomy_days: u32,
    /// Smallest catalog panel SKU rated at or above `required_kwp`, or the
    /// largest available when the catalog is undersized.
    pub recommended_panel: PanelSku,
    /// Smallest catalog battery SKU rated at or above `battery_kwh`, or the
    /// largest available when the catalog is undersized.
    pub recommended_battery: BatterySku,
    /// True when no catalog panel covers the requirement and
    /// `recommended_panel` is merely the largest on offer.
    pub panel_catalog_undersized: bool,
    /// True when no catalog battery covers the requirement.
    pub battery_catalog_undersized: bool,
}

/// Cost and payback estimate for a sized system, driven entirely by the
/// configured cost constants.
#[derive(Debug, Clone, Serialize)]
pub struct CostEstimate {
    /// Panel cost: `required_kwp × cost_per_kwp`.
    pub panel_cost: f32,
    /// Inverter cost: `required_kwp × inverter_cost_per_kwp`.
    pub inverter_cost: f32,
    /// Battery cost: `battery_kwh × battery_cost_per_kwh`.
    pub battery_cost: f32,
    /// Installation labor: `panel_cost × installation_fraction`.
    pub installation_cost: f32,
    /// Sum of the four components above.
    pub total_cost: f32,
    /// Monthly grid/generator spend the system displaces.
    pub monthly_grid_cost: f32,
    /// Months until cumulative displaced grid cost covers `total_cost`;
    /// zero when there is nothing to displace.
    pub payback_months: f32,
}

/// Required panel capacity for a daily load under the configured constants.
///
/// Shared by the sizer and the budget optimizer so both price capacity
/// identically.
///
/// # Errors
///
/// Returns `InvalidConfig` if `irradiance × efficiency <= 0`.
pub fn required_kwp(daily_kwh: f32, config: &SizingConfig) -> Result<f32, SizingError> {
    let s = &config.system;
    let denominator = s.irradiance_kwh_m2_day * s.efficiency;
    if denominator <= 0.0 {
        return Err(SizingError::InvalidConfig {
            field: "system.irradiance_kwh_m2_day × system.efficiency".to_string(),
            message: format!("product must be > 0, got {denominator}"),
        });
    }
    Ok(daily_kwh / denominator)
}

/// Sizes panels and battery for a daily energy total.
///
/// SKU selection rounds up to the next available catalog item. When the
/// requirement exceeds every cataloged SKU the largest one is returned and
/// the corresponding `*_catalog_undersized` flag is set — the condition is
/// surfaced, never silent.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative `daily_kwh` or zero
/// `autonomy_days`, and `InvalidConfig` when `irradiance × efficiency <= 0`
/// or a catalog is empty.
pub fn size_system(
    daily_kwh: f32,
    autonomy_days: u32,
    config: &SizingConfig,
) -> Result<SolarSpec, SizingError> {
    if daily_kwh < 0.0 {
        return Err(SizingError::InvalidInput {
            field: "daily_kwh".to_string(),
            message: format!("must be >= 0, got {daily_kwh}"),
        });
    }
    if autonomy_days == 0 {
        return Err(SizingError::InvalidInput {
            field: "autonomy_days".to_string(),
            message: "must be >= 1".to_string(),
        });
    }

    let kwp = required_kwp(daily_kwh, config)?;
    let battery_kwh = daily_kwh * autonomy_days as f32;

    let (recommended_panel, panel_catalog_undersized) =
        pick_sku(&config.panel_catalog, |sku| sku.kwp_rating, kwp).ok_or_else(|| {
            SizingError::InvalidConfig {
                field: "panel_catalog".to_string(),
                message: "must list at least one SKU".to_string(),
            }
        })?;
    let (recommended_battery, battery_catalog_undersized) =
        pick_sku(&config.battery_catalog, |sku| sku.kwh_rating, battery_kwh).ok_or_else(|| {
            SizingError::InvalidConfig {
                field: "battery_catalog".to_string(),
                message: "must list at least one SKU".to_string(),
            }
        })?;

    Ok(SolarSpec {
        daily_kwh,
        required_kwp: kwp,
        battery_kwh,
        autonomy_days,
        recommended_panel: recommended_panel.clone(),
        recommended_battery: recommended_battery.clone(),
        panel_catalog_undersized,
        battery_catalog_undersized,
    })
}

/// Smallest SKU whose rating covers `requirement`, falling back to the
/// largest SKU (flagged) when none qualifies. Selection does not depend on
/// catalog order. Returns `None` only for an empty catalog.
fn pick_sku<T>(catalog: &[T], rating: impl Fn(&T) -> f32, requirement: f32) -> Option<(&T, bool)> {
    let covering = catalog
        .iter()
        .filter(|sku| rating(sku) >= requirement)
        .min_by(|a, b| rating(a).total_cmp(&rating(b)));
    if let Some(sku) = covering {
        return Some((sku, false));
    }
    catalog
        .iter()
        .max_by(|a, b| rating(a).total_cmp(&rating(b)))
        .map(|sku| (sku, true))
}

/// Prices a sized system using the configured cost constants.
pub fn estimate_cost(spec: &SolarSpec, config: &SizingConfig) -> CostEstimate {
    let c = &config.costs;
    let panel_cost = spec.required_kwp * c.cost_per_kwp;
    let inverter_cost = spec.required_kwp * c.inverter_cost_per_kwp;
    let battery_cost = spec.battery_kwh * c.battery_cost_per_kwh;
    let installation_cost = panel_cost * c.installation_fraction;
    let total_cost = panel_cost + inverter_cost + battery_cost + installation_cost;

    let monthly_grid_cost = spec.daily_kwh * DAYS_PER_MONTH * c.grid_cost_per_kwh;
    let payback_months = if monthly_grid_cost > 0.0 {
        total_cost / monthly_grid_cost
    } else {
        0.0
    };

    CostEstimate {
        panel_cost,
        inverter_cost,
        battery_cost,
        installation_cost,
        total_cost,
        monthly_grid_cost,
        payback_months,
    }
}

impl fmt::Display for SolarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Solar Sizing ---")?;
        writeln!(f, "Daily energy need:     {:.2} kWh", self.daily_kwh)?;
        writeln!(f, "Required capacity:     {:.3} kWp", self.required_kwp)?;
        writeln!(
            f,
            "Battery capacity:      {:.2} kWh ({} day autonomy)",
            self.battery_kwh, self.autonomy_days
        )?;
        writeln!(
            f,
            "Recommended panel:     {} ({:.1} kWp){}",
            self.recommended_panel.name,
            self.recommended_panel.kwp_rating,
            if self.panel_catalog_undersized {
                "  [warning: requirement exceeds catalog]"
            } else {
                ""
            }
        )?;
        write!(
            f,
            "Recommended battery:   {} ({:.1} kWh){}",
            self.recommended_battery.name,
            self.recommended_battery.kwh_rating,
            if self.battery_catalog_undersized {
                "  [warning: requirement exceeds catalog]"
            } else {
                ""
            }
        )
    }
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Cost Estimate ---")?;
        writeln!(f, "Panels:        {:>14.0}", self.panel_cost)?;
        writeln!(f, "Inverter:      {:>14.0}", self.inverter_cost)?;
        writeln!(f, "Batteries:     {:>14.0}", self.battery_cost)?;
        writeln!(f, "Installation:  {:>14.0}", self.installation_cost)?;
        writeln!(f, "Total:         {:>14.0}", self.total_cost)?;
        writeln!(f, "Monthly grid cost displaced: {:.0}", self.monthly_grid_cost)?;
        write!(f, "Payback period: {:.1} months", self.payback_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(irradiance: f32, efficiency: f32) -> SizingConfig {
        let mut cfg = SizingConfig::lagos();
        cfg.system.irradiance_kwh_m2_day = irradiance;
        cfg.system.efficiency = efficiency;
        cfg
    }

    #[test]
    fn worked_example_kwp() {
        // 3.84 / (5.0 × 0.75) = 1.024 kWp
        let spec = size_system(3.84, 2, &config(5.0, 0.75)).unwrap();
        assert!((spec.required_kwp - 1.024).abs() < 1e-5);
    }

    #[test]
    fn worked_example_battery() {
        // 3.84 × 2 = 7.68 kWh
        let spec = size_system(3.84, 2, &config(5.0, 0.75)).unwrap();
        assert!((spec.battery_kwh - 7.68).abs() < 1e-5);
    }

    #[test]
    fn zero_load_yields_zero_spec() {
        let spec = size_system(0.0, 3, &SizingConfig::lagos()).unwrap();
        assert_eq!(spec.required_kwp, 0.0);
        assert_eq!(spec.battery_kwh, 0.0);
        assert!(!spec.panel_catalog_undersized);
        assert!(!spec.battery_catalog_undersized);
    }

    #[test]
    fn zero_efficiency_is_invalid_config() {
        let err = size_system(3.84, 2, &config(5.0, 0.0));
        assert!(matches!(err, Err(SizingError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_irradiance_is_invalid_config() {
        let err = size_system(3.84, 2, &config(0.0, 0.85));
        assert!(matches!(err, Err(SizingError::InvalidConfig { .. })));
    }

    #[test]
    fn negative_daily_kwh_is_invalid_input() {
        let err = size_system(-1.0, 2, &SizingConfig::lagos());
        assert!(matches!(err, Err(SizingError::InvalidInput { .. })));
    }

    #[test]
    fn zero_autonomy_is_invalid_input() {
        let err = size_system(3.84, 0, &SizingConfig::lagos());
        assert!(matches!(err, Err(SizingError::InvalidInput { .. })));
    }

    #[test]
    fn rounds_up_to_next_sku() {
        // 1.024 kWp requirement → 1.6 kWp array, not the 1.0 kWp one
        let cfg = config(5.0, 0.75);
        let spec = size_system(3.84, 2, &cfg).unwrap();
        assert_eq!(spec.recommended_panel.kwp_rating, 1.6);
        assert!(!spec.panel_catalog_undersized);
        // 7.68 kWh → 9.6 kWh bank
        assert_eq!(spec.recommended_battery.kwh_rating, 9.6);
    }

    #[test]
    fn exact_rating_match_is_not_rounded_up() {
        let mut cfg = SizingConfig::lagos();
        cfg.system.irradiance_kwh_m2_day = 5.0;
        cfg.system.efficiency = 0.8;
        // 4.0 / (5.0 × 0.8) = 1.0 kWp exactly
        let spec = size_system(4.0, 1, &cfg).unwrap();
        assert_eq!(spec.recommended_panel.kwp_rating, 1.0);
    }

    #[test]
    fn sku_selection_ignores_catalog_order() {
        let mut cfg = config(5.0, 0.75);
        cfg.panel_catalog.reverse();
        let spec = size_system(3.84, 2, &cfg).unwrap();
        assert_eq!(spec.recommended_panel.kwp_rating, 1.6);
    }

    #[test]
    fn undersized_catalog_flags_largest_sku() {
        // 100 kWh/day dwarfs every default SKU
        let cfg = SizingConfig::lagos();
        let spec = size_system(100.0, 2, &cfg).unwrap();
        assert!(spec.panel_catalog_undersized);
        assert!(spec.battery_catalog_undersized);
        assert_eq!(spec.recommended_panel.kwp_rating, 8.0);
        assert_eq!(spec.recommended_battery.kwh_rating, 19.2);
    }

    #[test]
    fn empty_catalog_is_invalid_config() {
        let mut cfg = SizingConfig::lagos();
        cfg.panel_catalog.clear();
        let err = size_system(3.84, 2, &cfg);
        assert!(matches!(err, Err(SizingError::InvalidConfig { .. })));
    }

    #[test]
    fn sizing_is_deterministic() {
        let cfg = config(5.0, 0.75);
        let a = size_system(3.84, 2, &cfg).unwrap();
        let b = size_system(3.84, 2, &cfg).unwrap();
        assert_eq!(a.required_kwp, b.required_kwp);
        assert_eq!(a.recommended_panel, b.recommended_panel);
    }

    #[test]
    fn cost_estimate_components_sum() {
        let cfg = SizingConfig::lagos();
        let spec = size_system(3.84, 2, &cfg).unwrap();
        let cost = estimate_cost(&spec, &cfg);
        let expected =
            cost.panel_cost + cost.inverter_cost + cost.battery_cost + cost.installation_cost;
        assert!((cost.total_cost - expected).abs() < 1e-2);
        assert!(cost.total_cost > 0.0);
    }

    #[test]
    fn zero_load_has_zero_payback() {
        let cfg = SizingConfig::lagos();
        let spec = size_system(0.0, 2, &cfg).unwrap();
        let cost = estimate_cost(&spec, &cfg);
        assert_eq!(cost.monthly_grid_cost, 0.0);
        assert_eq!(cost.payback_months, 0.0);
    }

    #[test]
    fn display_surfaces_undersized_warning() {
        let cfg = SizingConfig::lagos();
        let spec = size_system(100.0, 2, &cfg).unwrap();
        let s = format!("{spec}");
        assert!(s.contains("exceeds catalog"));
    }
}

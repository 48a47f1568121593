//! End-to-end tests over the calculate → size → optimize pipeline.

mod common;

use solarsize::config::SizingConfig;
use solarsize::load::EnergyProfile;
use solarsize::optimize::plan_within_budget;
use solarsize::sizing::{estimate_cost, size_system};
use solarsize::vendors::{SystemType, VendorDirectory, VendorRecord};

#[test]
fn worked_example_flows_through_the_whole_pipeline() {
    let entries = common::worked_example_entries();
    let config = common::example_config();

    let profile = EnergyProfile::from_entries(&entries).expect("profile should derive");
    assert!((profile.daily_kwh - 3.84).abs() < 1e-6);
    assert!((profile.monthly_kwh - 115.2).abs() < 1e-4);

    let spec = size_system(profile.daily_kwh, 2, &config).expect("sizing should succeed");
    assert!((spec.required_kwp - 1.024).abs() < 1e-5);
    assert!((spec.battery_kwh - 7.68).abs() < 1e-5);

    let cost = estimate_cost(&spec, &config);
    assert!(cost.total_cost > 0.0);
    assert!(cost.payback_months > 0.0);
}

#[test]
fn profile_totals_survive_reordering_through_sizing() {
    let mut entries = common::worked_example_entries();
    let config = common::example_config();

    let forward = EnergyProfile::from_entries(&entries).expect("profile should derive");
    entries.reverse();
    let reversed = EnergyProfile::from_entries(&entries).expect("profile should derive");

    let spec_fwd = size_system(forward.daily_kwh, 2, &config).expect("sizing should succeed");
    let spec_rev = size_system(reversed.daily_kwh, 2, &config).expect("sizing should succeed");
    assert_eq!(spec_fwd.required_kwp, spec_rev.required_kwp);
    assert_eq!(spec_fwd.recommended_panel, spec_rev.recommended_panel);
}

#[test]
fn optimizer_plan_is_consistent_with_sizer_pricing() {
    let entries = common::worked_example_entries();
    let config = common::example_config();

    let plan = plan_within_budget(&entries, 10_000_000.0, &config).expect("plan should derive");
    assert!(plan.deferred.is_empty(), "ample budget should fund everything");

    // The fully funded plan prices exactly like sizing the full load.
    let profile = EnergyProfile::from_entries(&entries).expect("profile should derive");
    let spec = size_system(profile.daily_kwh, 2, &config).expect("sizing should succeed");
    assert!((plan.achieved_kwp - spec.required_kwp).abs() < 1e-5);
    assert!(plan.achieved_cost <= 10_000_000.0);
}

#[test]
fn partial_budget_defers_lower_priority_entries_first() {
    let entries = common::worked_example_entries();
    let config = common::example_config();

    // Fridge alone needs 3.6/3.75 = 0.96 kWp → 288k; both need 1.024 → 307.2k.
    let plan = plan_within_budget(&entries, 300_000.0, &config).expect("plan should derive");
    assert_eq!(plan.funded.len(), 1);
    assert_eq!(plan.funded[0].entry.name, "Fridge");
    assert_eq!(plan.deferred.len(), 1);
    assert_eq!(plan.deferred[0].entry.name, "Bulb");
    assert!(plan.achieved_cost <= 300_000.0);
}

#[test]
fn vendor_directory_round_trip() {
    let mut dir = VendorDirectory::with_starter_vendors();
    let record = VendorRecord {
        name: "Pipeline Test Solar".to_string(),
        location: "Enugu".to_string(),
        system_types: vec![SystemType::OffGrid],
        contact: "0800".to_string(),
    };
    dir.register(record.clone()).expect("first registration should succeed");
    assert!(dir.register(record).is_err(), "duplicate should be rejected");

    let hits = dir.find("enugu", Some(SystemType::OffGrid));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Pipeline Test Solar");
}

#[test]
fn presets_produce_distinct_sizing() {
    let lagos = SizingConfig::from_preset("lagos").expect("preset should load");
    let kano = SizingConfig::from_preset("kano").expect("preset should load");

    let spec_lagos = size_system(3.84, 2, &lagos).expect("sizing should succeed");
    let spec_kano = size_system(3.84, 2, &kano).expect("sizing should succeed");

    // Higher irradiance needs less panel capacity for the same load.
    assert!(spec_kano.required_kwp < spec_lagos.required_kwp);
}

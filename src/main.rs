//! solarsize entry point — CLI wiring from config to printed reports.

use std::path::Path;
use std::process;

use solarsize::catalog;
use solarsize::config::SizingConfig;
use solarsize::io::export::export_csv;
use solarsize::io::import::read_entries_csv;
use solarsize::load::EnergyProfile;
use solarsize::optimize::plan_within_budget;
use solarsize::sizing::{estimate_cost, size_system};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    appliances_path: Option<String>,
    budget: Option<f32>,
    autonomy_override: Option<u32>,
    export_path: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("solarsize — household load estimation and solar system sizing");
    eprintln!();
    eprintln!("Usage: solarsize [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>       Load sizing config from TOML file");
    eprintln!("  --preset <name>       Use a built-in regional preset (lagos, abuja, kano)");
    eprintln!("  --appliances <path>   Load appliance entries from CSV");
    eprintln!("  --budget <amount>     Fit the load against a budget");
    eprintln!("  --autonomy <days>     Override configured battery autonomy days");
    eprintln!("  --export <path>       Export the energy breakdown to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve               Start REST API server");
        eprintln!("  --port <u16>          API server port (default: 3000)");
    }
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the lagos preset is used.");
    eprintln!("If no --appliances is given, a demo household bundle is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        appliances_path: None,
        budget: None,
        autonomy_override: None,
        export_path: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--appliances" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --appliances requires a path argument");
                    process::exit(1);
                }
                cli.appliances_path = Some(args[i].clone());
            }
            "--budget" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --budget requires an amount argument");
                    process::exit(1);
                }
                if let Ok(b) = args[i].parse::<f32>() {
                    cli.budget = Some(b);
                } else {
                    eprintln!("error: --budget value \"{}\" is not a valid number", args[i]);
                    process::exit(1);
                }
            }
            "--autonomy" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --autonomy requires a day-count argument");
                    process::exit(1);
                }
                if let Ok(d) = args[i].parse::<u32>() {
                    cli.autonomy_override = Some(d);
                } else {
                    eprintln!("error: --autonomy value \"{}\" is not a valid u32", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then lagos default
    let mut config = if let Some(ref path) = cli.config_path {
        match SizingConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match SizingConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        SizingConfig::lagos()
    };

    if let Some(days) = cli.autonomy_override {
        config.system.autonomy_days = days;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Appliance entries: CSV file or the built-in demo household
    let entries = if let Some(ref path) = cli.appliances_path {
        match read_entries_csv(Path::new(path)) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        catalog::demo_household()
    };

    let profile = match EnergyProfile::from_entries(&entries) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    println!("{profile}");

    let spec = match size_system(profile.daily_kwh, config.system.autonomy_days, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    println!("\n{spec}");

    let cost = estimate_cost(&spec, &config);
    println!("\n{cost}");

    if let Some(budget) = cli.budget {
        match plan_within_budget(&entries, budget, &config) {
            Ok(plan) => println!("\n{plan}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    if let Some(ref path) = cli.export_path {
        if let Err(e) = export_csv(&profile, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Breakdown written to {path}");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::{Arc, Mutex};

        use solarsize::vendors::VendorDirectory;

        let state = Arc::new(solarsize::api::AppState {
            config,
            vendors: Mutex::new(VendorDirectory::with_starter_vendors()),
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(solarsize::api::serve(state, addr));
    }
}

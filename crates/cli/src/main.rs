//! Inspect platform capabilities, reference control profiles and simulator configs.
//!
//! Examples:
//!   simcfg caps
//!   simcfg profile --platform android
//!   simcfg profile --platform linux --device keyboard --json
//!   simcfg check --config ".\\sim.json" --profile ".\\my_profile.json"
//!   simcfg cockpit --aircraft a380
//!
//! Notes:
//! - `check` exits with an error if the config or profile asks for inputs the platform lacks.
//! - Nothing is written to disk.

use std::{fs, path::PathBuf, sync::Arc};

use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;

use flightsim_core::prelude::*;

// ───────────────────────────── CLI Args ─────────────────────────────

fn parse_platform_arg(s: &str) -> Result<Platform, String> {
    s.parse::<Platform>().map_err(|e| e.to_string())
}

fn parse_device_arg(s: &str) -> Result<DeviceType, String> {
    s.parse::<DeviceType>().map_err(|e| e.to_string())
}

fn parse_aircraft_arg(s: &str) -> Result<AircraftType, String> {
    match s.to_ascii_lowercase().as_str() {
        "a380" => Ok(AircraftType::A380),
        "b747" | "747" => Ok(AircraftType::B747),
        _ => Err("expected one of: a380, b747".into()),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "simcfg",
    version,
    about = "Inspect flight-sim control profiles and configs"
)]
struct Args {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the capability table for every platform
    Caps,

    /// Print the default control profile for a platform
    Profile {
        /// linux | windows | android
        #[arg(long, short, default_value = "linux", value_parser = parse_platform_arg)]
        platform: Platform,

        /// Only show actions bound to this device (keyboard, mouse_axis, gyro, ...)
        #[arg(long, short, value_parser = parse_device_arg)]
        device: Option<DeviceType>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a simulation config (and optionally a profile) file
    Check {
        /// Path to a simulation config JSON
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Use the default config for this platform instead of a file
        #[arg(long, short, value_parser = parse_platform_arg, conflicts_with = "config")]
        platform: Option<Platform>,

        /// Control profile JSON to check against the config's platform
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// List cockpit controls of a catalog aircraft by panel section
    Cockpit {
        /// a380 | b747
        #[arg(long, short, value_parser = parse_aircraft_arg)]
        aircraft: AircraftType,
    },
}

// ───────────────────────────── Logger ─────────────────────────────

#[derive(Clone)]
struct StderrLogger {
    verbose: bool,
}

// Implement CoreLog (used by the core crate).
impl CoreLog for StderrLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        if level < LogLevel::Warn && !self.verbose {
            return;
        }
        eprintln!("{:<6} {msg}", format!("{level}:"));
    }
}

// ───────────────────────────── Output ─────────────────────────────

#[derive(Serialize)]
struct ProfileExport<'a> {
    generated_at: String,
    profile: &'a ControlProfile,
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn print_caps() {
    println!(
        "{:<10} {:>8} {:>9} {:>6} {:>5}",
        "platform", "pointer", "keyboard", "touch", "gyro"
    );
    for platform in Platform::iter() {
        let caps = capabilities_of(platform);
        println!(
            "{:<10} {:>8} {:>9} {:>6} {:>5}",
            platform.name(),
            yes_no(caps.pointer),
            yes_no(caps.keyboard),
            yes_no(caps.touch),
            yes_no(caps.gyro)
        );
    }
}

fn print_profile(
    platform: Platform,
    device: Option<DeviceType>,
    json: bool,
) -> Result<(), String> {
    let profile = default_profile(platform);

    if json {
        // narrow to the filtered actions so the export matches the table view
        let shown = match device {
            Some(d) => {
                let mut narrowed = ControlProfile::new(profile.name.clone(), profile.platform);
                for b in profile.bindings_for_device(d) {
                    for spec in b.iter() {
                        narrowed.bind(&b.action, spec.clone());
                    }
                }
                narrowed
            }
            None => profile.clone(),
        };
        let export = ProfileExport {
            generated_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            profile: &shown,
        };
        let out = serde_json::to_string_pretty(&export).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("# {} ({})", profile.name, profile.platform);
    let rows: Vec<&ActionBinding> = match device {
        Some(d) => profile.bindings_for_device(d).collect(),
        None => profile.iter().collect(),
    };
    for b in rows {
        println!(
            "{:<20} {}",
            b.action,
            b.inputs_label().unwrap_or_else(|| "<unbound>".into())
        );
    }
    Ok(())
}

fn run_check(
    config: Option<PathBuf>,
    platform: Option<Platform>,
    profile: Option<PathBuf>,
    logger: &Arc<dyn CoreLog>,
) -> Result<(), String> {
    let cfg = match (config, platform) {
        (Some(path), _) => {
            let content =
                fs::read_to_string(&path).map_err(|e| format!("read {}: {e}", path.display()))?;
            SimulationConfig::from_json(&content, logger)
                .map_err(|e| format!("{}: {e}", path.display()))?
        }
        (None, Some(p)) => default_config(p).map_err(|e| e.to_string())?,
        (None, None) => return Err("pass --config <PATH> or --platform <NAME>".into()),
    };
    logger.info(&format!("config ok for {}", cfg.platform));

    if let Some(path) = profile {
        let content =
            fs::read_to_string(&path).map_err(|e| format!("read {}: {e}", path.display()))?;
        let prof = ControlProfile::from_json(&content, logger)
            .map_err(|e| format!("{}: {e}", path.display()))?;

        if prof.platform != cfg.platform {
            logger.warn(&format!(
                "profile '{}' targets {}, session runs on {}",
                prof.name, prof.platform, cfg.platform
            ));
        }
        let mut scoped = prof.clone();
        scoped.platform = cfg.platform;
        let bad: Vec<String> = scoped
            .unsupported_inputs()
            .map(|(b, s)| format!("{} <- {s}", b.action))
            .collect();
        if !bad.is_empty() {
            for line in &bad {
                logger.error(&format!("unsupported on {}: {line}", cfg.platform));
            }
            return Err(format!(
                "profile '{}' has {} input(s) {} can't provide",
                prof.name,
                bad.len(),
                cfg.platform
            ));
        }
    }

    println!("OK");
    Ok(())
}

fn print_cockpit(kind: AircraftType) -> Result<(), String> {
    let aircraft = flightsim_core::aircraft::find_aircraft(kind)
        .ok_or_else(|| format!("{kind} is not in the catalog"))?;
    println!("# {}", aircraft.name);
    for section in PanelSection::ALL {
        let controls: Vec<&ControlDescriptor> = aircraft.controls_in_section(section).collect();
        if controls.is_empty() {
            continue;
        }
        println!("[{section}]");
        for c in controls {
            let detents = c
                .detents
                .as_ref()
                .map(|d| format!(" ({})", d.join("/")))
                .unwrap_or_default();
            let guard = if c.guarded { " [guarded]" } else { "" };
            println!("  {:<16} {:<12} {:?}{detents}{guard}", c.control_id, c.label, c.kind);
        }
    }
    Ok(())
}

// ───────────────────────────── main ─────────────────────────────

fn main() -> Result<(), String> {
    let args = Args::parse();

    let core_log: Arc<dyn CoreLog> = Arc::new(StderrLogger {
        verbose: args.verbose,
    });

    match args.command {
        Command::Caps => {
            print_caps();
            Ok(())
        }
        Command::Profile {
            platform,
            device,
            json,
        } => print_profile(platform, device, json),
        Command::Check {
            config,
            platform,
            profile,
        } => run_check(config, platform, profile, &core_log),
        Command::Cockpit { aircraft } => print_cockpit(aircraft),
    }
}

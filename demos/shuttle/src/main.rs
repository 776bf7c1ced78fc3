//! shuttle — demo driver for the rust_fleet vehicle model.
//!
//! Loads a small mixed roster of planes and trains, sorts each kind by
//! capacity, then advances one randomly chosen vehicle per step and prints
//! the fleet report at a fixed interval.
//!
//! Usage: `shuttle [config.json]`.  Set `RUST_LOG=debug` for library events.

mod config;
mod roster;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use fleet_core::{DriverRng, VehicleKind};
use fleet_report::{CsvWriter, ReportWriter, TextWriter, VehicleRow, report_all, sort_vehicles};
use fleet_vehicle::{Movable, Vehicle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::DriverConfig;
use roster::load_roster;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DriverConfig::load(&PathBuf::from(path))?,
        None => DriverConfig::default(),
    };
    info!(seed = config.seed, ticks = config.total_ticks, "starting shuttle");

    let roster = load_roster(&config.limits)?;
    let (mut planes, mut trains): (Vec<Vehicle>, Vec<Vehicle>) =
        roster.into_iter().partition(|v| v.kind() == VehicleKind::Plane);
    sort_vehicles(&mut planes)?;
    sort_vehicles(&mut trains)?;

    println!("=== planes by max height ===");
    println!("{}", report_all(&planes));
    println!("=== trains by max passengers ===");
    println!("{}", report_all(&trains));
    println!();

    let mut fleet: Vec<Vehicle> = planes.into_iter().chain(trains).collect();
    info!(vehicles = fleet.len(), "fleet admitted");

    let mut writers: Vec<Box<dyn ReportWriter>> = vec![Box::new(TextWriter::new(io::stdout()))];
    if let Some(dir) = &config.output_dir {
        writers.push(Box::new(CsvWriter::new(dir)?));
    }

    let mut rng = DriverRng::new(config.seed);
    for tick in 0..config.total_ticks {
        if tick % config.report_interval_ticks == 0 {
            snapshot(&mut writers, tick, &fleet)?;
        }
        if let Some(i) = rng.choose_index(fleet.len()) {
            fleet[i].advance();
        }
    }
    snapshot(&mut writers, config.total_ticks, &fleet)?;
    for w in writers.iter_mut() {
        w.finish()?;
    }

    println!();
    println!("=== final state ===");
    for v in &fleet {
        println!("{v}");
    }
    println!("{}", serde_json::to_string_pretty(&fleet)?);
    Ok(())
}

fn snapshot(writers: &mut [Box<dyn ReportWriter>], tick: u64, fleet: &[Vehicle]) -> Result<()> {
    let rows: Vec<VehicleRow> = fleet.iter().map(VehicleRow::from_movable).collect();
    for w in writers.iter_mut() {
        w.write_rows(tick, &rows)?;
    }
    Ok(())
}

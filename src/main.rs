//! Rekha - headless lidar sweep runner
//!
//! Loads a scene, runs the sweep for a fixed number of ticks and writes the
//! resulting point cloud as JSON.
//!
//! Usage:
//!   rekha                                   # reference scene, one pass
//!   rekha --config configs/scene.toml --ticks 60 --output cloud.json
//!   rekha --realtime                        # sleep tick_interval_ms per tick

use clap::Parser;
use rekha::{LidarSweep, Result, SimConfig};
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Lidar sweep runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene configuration file (reference scene if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 120)]
    ticks: u64,

    /// Output file for the JSON snapshot (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sleep the configured tick interval between ticks
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            log::info!("Using config: {}", path.display());
            SimConfig::load(path)?
        }
        None => {
            log::info!("Using reference scene");
            SimConfig::default()
        }
    };
    let interval = Duration::from_millis(config.sweep.tick_interval_ms);

    let mut sweep = LidarSweep::new(config)?;
    sweep.start()?;

    for _ in 0..args.ticks {
        if let Some(outcome) = sweep.tick() {
            log::trace!("Tick {}: {:?}", outcome.tick, outcome.hit);
        }
        if args.realtime {
            thread::sleep(interval);
        }
    }

    let cloud = sweep.point_cloud();
    log::info!(
        "Finished {} ticks: {} samples, {} hits, sender at x={}",
        sweep.ticks(),
        cloud.len(),
        cloud.hit_count(),
        sweep.signal_x()
    );

    let json = serde_json::to_string_pretty(&sweep.snapshot())?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

//! Headless runner. Evolves a population and logs the champion as it goes.
//!
//! Usage:
//!     stance --speed 100 --report-every 600
//!     stance -c config.json --frames 100000 --seed 7 --snapshot out.json

use clap::Parser;
use core::num::NonZeroU32;
use rand::SeedableRng;
use serde::Serialize;
use stance::{
    constants::STANCE_HEAD_RADIUS,
    random::{default_rng, WyRng},
    Frame, Physics, Preset, SimConfig, Simulation, Stats, Target,
};
use std::{error::Error, fs};

#[derive(Parser, Debug)]
#[command(name = "stance")]
#[command(about = "Evolve stick figures that keep both feet on the ground")]
struct Args {
    /// JSON config file, missing fields fall back to defaults
    #[arg(short, long)]
    config: Option<String>,

    /// Stop after this many frames. Runs forever if omitted
    #[arg(short, long)]
    frames: Option<u64>,

    /// Physics steps per frame
    #[arg(short, long, default_value = "1")]
    speed: NonZeroU32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Integrator preset, replaces the config's physics section
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Log the champion every N frames
    #[arg(long, default_value = "600")]
    report_every: u64,

    /// Write the final frame and stats to this path as JSON
    #[arg(long)]
    snapshot: Option<String>,
}

#[derive(Serialize)]
struct Snapshot {
    stats: Stats,
    frame: Frame,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(preset) = args.preset {
        config.physics = Physics::from(preset);
    }

    let rng = args.seed.map_or_else(default_rng, WyRng::seed_from_u64);
    let mut sim = Simulation::new(&config, config.cadence, rng)?;
    sim.set_speed(args.speed);

    log::info!("Stance");
    log::info!("  Population: {} ({} elites)", config.population.size, config.population.elites);
    log::info!("  Speed: {} steps/frame", args.speed);
    log::info!("  Cadence: {:?}", config.cadence);

    let bounds = config.viewport.bounds();
    let target = Target::Frames(args.frames.unwrap_or(u64::MAX));
    let report_every = args.report_every.max(1);
    let mut champ = None;
    let stats = sim.run(
        target,
        || bounds,
        |report| {
            if let Some(stats) = report.reproduced {
                champ = Some(stats);
            }
            if report.frame % report_every == 0 {
                if let Some(stats) = champ {
                    log::info!(
                        "frame {} gen {}: champ {} (rate {:.4}), mean {:.3}",
                        report.frame,
                        stats.generation,
                        stats.best_score,
                        stats.best_mutation_rate,
                        stats.mean_score
                    );
                }
            }
        },
    );

    if let Some(path) = args.snapshot {
        let snapshot = Snapshot {
            stats,
            frame: sim.render(STANCE_HEAD_RADIUS),
        };
        fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        log::info!("snapshot written to {path}");
    }

    Ok(())
}

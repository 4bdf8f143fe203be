//! Skunk headless runner
//!
//! Drives the simulation without a window: spawns balls, steps frames and
//! reports energy. Useful for tuning configs and eyeballing behaviour.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use skunk::consts::{BALL_LEFT, BALL_OTHER, FPS};
use skunk::{PhysicsConfig, Simulation, Vector2};

/// Spawn attempts per requested ball before giving up on a crowded arena
const SPAWN_ATTEMPTS_PER_BALL: usize = 20;

/// Run the bouncing ball simulation headless
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Random balls to spawn in addition to the starter ball
    #[arg(short, long, default_value_t = 8)]
    balls: usize,

    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start with gravity on
    #[arg(short, long)]
    gravity: bool,

    /// Fire a shockwave from the arena centre at this frame
    #[arg(long)]
    shockwave_at: Option<u64>,

    /// JSON physics config (missing keys use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    skunk::logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => PhysicsConfig::load(path)?,
        None => {
            log::info!("Using default physics config");
            PhysicsConfig::default()
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut sim = Simulation::with_seed(config, seed)?;
    log::info!("Skunk (headless) starting with seed {}", sim.seed());
    populate(&mut sim, args.balls);
    if args.gravity {
        sim.toggle_gravity();
    }

    let centre = Vector2::new(
        sim.config().play_area_width() / 2.0,
        sim.config().play_area_height() / 2.0,
    );
    let start_energy = sim.total_energy();

    for frame in 0..args.frames {
        if args.shockwave_at == Some(frame) {
            sim.apply_shockwave(centre);
        }
        sim.update();
        if sim.frame() % u64::from(FPS) == 0 {
            log::info!(
                "frame {:>6}: energy {:>10.1}, balls {}",
                sim.frame(),
                sim.total_energy(),
                sim.balls().len()
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    } else {
        println!(
            "{} frames, {} balls, energy {:.1} -> {:.1}",
            sim.frame(),
            sim.balls().len(),
            start_energy,
            sim.total_energy()
        );
    }
    Ok(())
}

/// Spawn the diagonal starter ball, then `count` random balls at random spots
fn populate(sim: &mut Simulation, count: usize) {
    sim.spawn(Vector2::new(30.0, 30.0), BALL_LEFT, Some(Vector2::new(2.0, 1.5)));

    // Placement uses its own stream so it does not perturb the spawn RNG
    let mut rng = Pcg32::seed_from_u64(sim.seed() ^ 0x5eed);
    let margin = sim.config().max_radius;
    let width = sim.config().play_area_width();
    let height = sim.config().play_area_height();

    let mut spawned = 0;
    for _ in 0..count * SPAWN_ATTEMPTS_PER_BALL {
        if spawned == count {
            break;
        }
        let position = Vector2::new(
            rng.random_range(margin..=width - margin),
            rng.random_range(margin..=height - margin),
        );
        let color = if rng.random_bool(0.5) { BALL_LEFT } else { BALL_OTHER };
        if sim.spawn(position, color, None).is_some() {
            spawned += 1;
        }
    }
    if spawned < count {
        log::warn!("Only placed {} of {} balls", spawned, count);
    }
}

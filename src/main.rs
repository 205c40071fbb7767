//! Plinko headless runner
//!
//! Deposits, drops a batch of balls spaced a few frames apart, runs the board
//! until everything has settled, and reports the outcome.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use plinko::Game;
use plinko::Tuning;
use plinko::audio::{LogPlayer, SoundBoard};
use plinko::platform::LogDisplay;

/// Give up after this many frames even if balls are still moving
const MAX_FRAMES: u64 = 1_000_000;

#[derive(Parser)]
#[command(name = "plinko")]
#[command(about = "Drop balls through a plinko board and report the payouts")]
struct Args {
    /// Tuning file (JSON); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Amount deposited before the first drop
    #[arg(long, default_value_t = 100.0)]
    deposit: f64,

    /// Wager per ball
    #[arg(short, long, default_value_t = 1.0)]
    wager: f64,

    /// Number of balls to drop
    #[arg(short, long, default_value_t = 10)]
    drops: u32,

    /// Frames between drops
    #[arg(long, default_value_t = 15)]
    interval: u64,

    /// RNG seed (clock-based when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the effective tuning as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Don't start any payout clips
    #[arg(long)]
    mute: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let tuning = match &args.config {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    if args.dump_config {
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Plinko (headless) starting, seed {}", seed);

    let sounds = SoundBoard::new(tuning.sounds.clone(), LogPlayer);
    let mut game = Game::new(tuning, seed, sounds, LogDisplay)?;
    game.audio_mut().set_muted(args.mute);
    game.deposit(args.deposit)?;

    let mut dropped = 0;
    let mut landed = 0;
    let mut net = 0.0;
    let mut best: Option<f64> = None;

    while game.frame_count < MAX_FRAMES {
        if dropped < args.drops && game.frame_count.is_multiple_of(args.interval.max(1)) {
            match game.drop_ball(args.wager) {
                Ok(_) => dropped += 1,
                Err(err) => {
                    log::warn!("Stopping drops: {}", err);
                    dropped = args.drops;
                }
            }
        }

        for landing in game.step() {
            landed += 1;
            net += landing.net();
            best = Some(best.map_or(landing.multiplier, |b: f64| b.max(landing.multiplier)));
        }

        if dropped >= args.drops && game.session.is_idle() {
            break;
        }
    }

    println!(
        "{} balls landed in {} frames; balance {} (net {:+.2}), best x{}",
        landed,
        game.frame_count,
        game.session.balance_text(),
        net,
        best.unwrap_or(0.0)
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

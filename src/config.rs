use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::FoodPlacement;

/// Snake on a 20x20 grid, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "gridsnake", version, about)]
pub struct Args {
    /// Milliseconds between game steps.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for food placement. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where new food may appear.
    #[arg(long, value_enum, default_value_t = FoodPlacement::Anywhere)]
    pub food: FoodPlacement,

    /// Name shown on the high score board.
    #[arg(long, default_value = "player")]
    pub name: String,

    /// Write logs to this file. Filter with RUST_LOG (default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

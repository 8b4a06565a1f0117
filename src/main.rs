use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gridsnake::clock::FixedInterval;
use gridsnake::config::Args;
use gridsnake::game::Game;
use gridsnake::scores::HighScores;
use gridsnake::session::{self, Exit};
use gridsnake::term::{TermManager, MIN_SIZE};

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut term = TermManager::new().context("reading terminal size")?;
    let (w, h) = term.get_terminal_size();
    ensure!(
        term.fits_board(),
        "terminal is {}x{}, the board needs at least {}x{}",
        w, h, MIN_SIZE.0, MIN_SIZE.1
    );

    // Setup can fail halfway, e.g. after entering the alternate screen
    let res = term.setup().context("preparing terminal").and_then(|_| run(&args, &mut term));
    // Restore the terminal before any error gets printed
    let restored = term.restore().context("restoring terminal");
    first_error(res, restored)
}

/// The run's own error wins; a restore error behind it is only logged.
fn first_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            error!("{:#}", restore_err);
            Err(err)
        }
        (res, restored) => res.and(restored),
    }
}

fn run(args: &Args, term: &mut TermManager) -> Result<()> {
    let mut game = Game::new(args.rng(), args.food);
    let mut clock = FixedInterval::new(args.tick_interval());
    let mut scores = HighScores::new(&args.name);
    info!(tick = ?clock.period(), seed = ?args.seed, "starting");

    // The home screen loop; a session ends either back here or by quitting
    while term.show_home(&scores)? {
        term.clear()?;
        term.draw_borders()?;
        game.reset();

        match session::run(&mut game, &mut clock, term, &mut scores)? {
            Exit::Home => continue,
            Exit::Quit => break,
        }
    }

    info!("bye");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

use std::io;

use tracing::{debug, info};

use crate::clock::Scheduler;
use crate::game::Game;
use crate::input::{Key, KeySource};
use crate::prompt::Confirm;
use crate::render::Surface;
use crate::scores::HighScores;

/// Everything a session needs from the outside world besides the clock.
pub trait Frontend: KeySource + Surface + Confirm {}

impl<T: KeySource + Surface + Confirm> Frontend for T {}

/// How a session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The player declined to play again.
    Home,
    /// The player asked to quit the program.
    Quit,
}

const PAUSE_MESSAGE: &[&str] = &["Paused", "Press Esc to resume", "or CTRL+C to quit"];

/// Runs the game until the player leaves it.
///
/// Every tick first applies the keys pressed since the previous one, in
/// order, then advances the game and redraws. A collision blocks on the
/// frontend's confirmation: yes resets the game and keeps ticking, no
/// returns `Exit::Home`. Every finished game goes on the score board.
pub fn run<S, F>(game: &mut Game, scheduler: &mut S, frontend: &mut F, scores: &mut HighScores) -> io::Result<Exit>
where
    S: Scheduler,
    F: Frontend,
{
    let mut paused = false;
    info!(food = ?game.food(), placement = ?game.placement(), "session started");
    frontend.present(&game.scene())?;

    loop {
        scheduler.wait_for_tick();

        for key in frontend.pending_keys()? {
            match key {
                Key::Quit => {
                    info!(score = game.score(), "quit requested");
                    return Ok(Exit::Quit);
                }
                Key::Pause => {
                    paused = !paused;
                    debug!(paused, "pause toggled");
                    if paused {
                        frontend.show_message(PAUSE_MESSAGE)?;
                    } else {
                        frontend.hide_message()?;
                    }
                }
                // No steering while paused
                key if !paused => {
                    game.set_direction(key);
                }
                _ => {}
            }
        }

        if paused {
            continue;
        }

        if let Err(over) = game.tick() {
            let score = game.score();
            let rank = scores.record(score);
            info!(score, ?rank, "game over: {}", over);

            let score_line = format!("Score: {}", score);
            let best_line = match rank {
                Some(1) => "New high score!".to_string(),
                Some(rank) => format!("#{} on the board, best {}", rank, scores.best().unwrap_or(score)),
                None => format!("Best: {}", scores.best().unwrap_or(score)),
            };
            let again = frontend.confirm(&["Game over!", &score_line, &best_line, "", "Play again? (y/n)"])?;
            if !again {
                info!("leaving for home screen");
                return Ok(Exit::Home);
            }

            game.reset();
            info!(food = ?game.food(), "game restarted");
        }

        frontend.present(&game.scene())?;
    }
}

use std::io;

use crate::snake::Direction;

/// Keys the game reacts to. Everything else arrives as `Other`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Pause,
    Quit,
    Other,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Source of key presses made since the last call, oldest first.
pub trait KeySource {
    fn pending_keys(&mut self) -> io::Result<Vec<Key>>;
}

use std::io;

/// Blocking yes/no decision, e.g. "play again?".
pub trait Confirm {
    fn confirm(&mut self, lines: &[&str]) -> io::Result<bool>;
}

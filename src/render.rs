use std::io;

use crate::board::{Position, CELL_SIZE};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpriteKind {
    Snake,
    Food,
}

/// One square drawn on the surface, in board units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Sprite {
    pub fn at(kind: SpriteKind, pos: Position) -> Self {
        Sprite { kind, x: pos.x, y: pos.y, size: CELL_SIZE }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Full contents of the board for one frame. Presenting a scene replaces
/// whatever was drawn before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub sprites: Vec<Sprite>,
}

impl Scene {
    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

pub trait Surface {
    /// Clears the board and draws every sprite in `scene`.
    fn present(&mut self, scene: &Scene) -> io::Result<()>;

    /// Shows a centered message on top of the board.
    fn show_message(&mut self, lines: &[&str]) -> io::Result<()>;

    fn hide_message(&mut self) -> io::Result<()>;
}

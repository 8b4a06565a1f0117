use crate::snake::Direction;

/// Side length of one grid cell, in board units.
pub const CELL_SIZE: i32 = 20;
/// Width and height of the square board, in board units.
pub const BOARD_SIZE: i32 = 400;
pub const CELLS_PER_SIDE: i32 = BOARD_SIZE / CELL_SIZE;

/// A point on the board. Valid positions are multiples of `CELL_SIZE`
/// inside `[0, BOARD_SIZE)` on both axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Position of the cell at column `col`, row `row`.
    pub const fn from_cell(col: i32, row: i32) -> Self {
        Position { x: col * CELL_SIZE, y: row * CELL_SIZE }
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.x / CELL_SIZE, self.y / CELL_SIZE)
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }
}

/// Where a fresh snake starts.
pub fn center() -> Position {
    Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2)
}

/// Every cell of the board, row by row.
pub fn cells() -> impl Iterator<Item = Position> {
    (0..CELLS_PER_SIDE).flat_map(|row| (0..CELLS_PER_SIDE).map(move |col| Position::from_cell(col, row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_twenty_cells_wide() {
        assert_eq!(CELLS_PER_SIDE, 20);
        assert_eq!(cells().count(), 400);
        assert_eq!(center(), Position::new(200, 200));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Position::new(0, 0).in_bounds());
        assert!(Position::new(380, 380).in_bounds());
        assert!(!Position::new(400, 0).in_bounds());
        assert!(!Position::new(0, 400).in_bounds());
        assert!(!Position::new(-20, 100).in_bounds());
        assert!(!Position::new(100, -20).in_bounds());
    }

    #[test]
    fn step_moves_one_cell() {
        let pos = Position::new(200, 200);
        assert_eq!(pos.step(Direction::Up), Position::new(200, 180));
        assert_eq!(pos.step(Direction::Down), Position::new(200, 220));
        assert_eq!(pos.step(Direction::Left), Position::new(180, 200));
        assert_eq!(pos.step(Direction::Right), Position::new(220, 200));
        assert_eq!(pos.cell(), (10, 10));
    }
}

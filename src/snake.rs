use std::collections::VecDeque;

use crate::board::{Position, CELL_SIZE};
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Board units moved per tick, as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -CELL_SIZE),
            Down => (0, CELL_SIZE),
            Left => (-CELL_SIZE, 0),
            Right => (CELL_SIZE, 0),
        }
    }
}

/// The snake's body, head first. Never empty.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    // Direction of the last step actually taken; turns are checked against it
    moved: Direction,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake::with_body(head, std::iter::empty(), direction)
    }

    /// Builds a snake from its head and the remaining segments, in order
    /// from the one behind the head to the tail.
    pub fn with_body<I>(head: Position, rest: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut body = VecDeque::new();
        body.push_back(head);
        body.extend(rest);
        Snake { body, direction, moved: direction }
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Moves the head to `new_head`. Returns the dropped tail, or `None` when
    /// the snake grows this step.
    pub fn advance(&mut self, new_head: Position, grow: bool) -> Option<Position> {
        self.body.push_front(new_head);
        self.moved = self.direction;

        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Changes direction unless the new one lies on the axis of the last
    /// step taken. Every turn made before the next step is checked against
    /// that same step. Returns whether the direction was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        let (dx, dy) = self.moved.delta();
        let allowed = match new_direction {
            Up | Down => dy == 0,
            Left | Right => dx == 0,
        };

        if allowed {
            self.direction = new_direction;
        }
        allowed
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}

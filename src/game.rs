use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::board::{self, Position, CELLS_PER_SIDE};
use crate::input::Key;
use crate::render::{Scene, Sprite, SpriteKind};
use crate::snake::{Direction, Snake};

const INITIAL_DIRECTION: Direction = Direction::Up;

/// How `place_food` picks a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum FoodPlacement {
    /// Any cell, even one the snake is on.
    #[default]
    Anywhere,
    /// Only cells the snake does not occupy.
    AvoidSnake,
}

/// Why a tick could not be applied. The game state is left exactly as it
/// was before the tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GameOver {
    #[error("snake left the board at ({}, {})", .0.x, .0.y)]
    OutOfBounds(Position),
    #[error("snake ran into itself at ({}, {})", .0.x, .0.y)]
    SelfCollision(Position),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Moved,
    Ate,
}

pub struct Game {
    snake: Snake,
    food: Position,
    rng: StdRng,
    placement: FoodPlacement,
}

impl Game {
    pub fn new(rng: StdRng, placement: FoodPlacement) -> Self {
        let mut game = Game {
            snake: Snake::new(board::center(), INITIAL_DIRECTION),
            food: board::center(),
            rng,
            placement,
        };
        game.place_food();
        game
    }

    /// Back to a single segment in the center, heading up, with fresh food.
    pub fn reset(&mut self) {
        self.snake = Snake::new(board::center(), INITIAL_DIRECTION);
        self.place_food();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.snake.get_direction()
    }

    pub fn placement(&self) -> FoodPlacement {
        self.placement
    }

    /// Segments grown since the start.
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    pub fn place_food(&mut self) -> Position {
        self.food = match self.placement {
            FoodPlacement::Anywhere => random_cell(&mut self.rng),
            FoodPlacement::AvoidSnake => {
                let snake = &self.snake;
                let free: Vec<Position> = board::cells().filter(|pos| !snake.occupies(*pos)).collect();
                match free.choose(&mut self.rng) {
                    Some(pos) => *pos,
                    None => {
                        debug!("no free cell left for food, placing anywhere");
                        random_cell(&mut self.rng)
                    }
                }
            }
        };

        debug!(x = self.food.x, y = self.food.y, "placed food");
        self.food
    }

    /// Applies a directional key. Returns whether the turn was accepted.
    pub fn set_direction(&mut self, key: Key) -> bool {
        let accepted = match key.direction() {
            Some(dir) => self.snake.set_direction(dir),
            None => false,
        };

        if accepted {
            debug!(direction = ?self.snake.get_direction(), "turn accepted");
        }
        accepted
    }

    pub fn tick(&mut self) -> Result<Step, GameOver> {
        let new_head = self.snake.next_head();

        if !new_head.in_bounds() {
            return Err(GameOver::OutOfBounds(new_head));
        }
        if self.snake.occupies(new_head) {
            return Err(GameOver::SelfCollision(new_head));
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        trace!(x = new_head.x, y = new_head.y, len = self.snake.len(), "tick");

        if ate {
            self.place_food();
            Ok(Step::Ate)
        } else {
            Ok(Step::Moved)
        }
    }

    pub fn scene(&self) -> Scene {
        let mut sprites: Vec<Sprite> = self.snake.body().iter()
            .map(|pos| Sprite::at(SpriteKind::Snake, *pos))
            .collect();
        sprites.push(Sprite::at(SpriteKind::Food, self.food));
        Scene { sprites }
    }

    /// Replaces the snake. Meant for tests and tooling.
    pub fn debug_set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn debug_set_food(&mut self, food: Position) {
        self.food = food;
    }
}

fn random_cell<R: Rng>(rng: &mut R) -> Position {
    Position::from_cell(rng.gen_range(0..CELLS_PER_SIDE), rng.gen_range(0..CELLS_PER_SIDE))
}

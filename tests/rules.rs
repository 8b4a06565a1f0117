use gridsnake::board::Position;
use gridsnake::game::{FoodPlacement, Game, GameOver, Step};
use gridsnake::input::Key;
use gridsnake::snake::{Direction, Snake};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game(seed: u64) -> Game {
    Game::new(StdRng::seed_from_u64(seed), FoodPlacement::Anywhere)
}

#[test]
fn safe_move_puts_new_head_first() {
    let mut game = new_game(1);
    game.debug_set_snake(Snake::with_body(
        Position::new(200, 200),
        vec![Position::new(200, 220)],
        Direction::Up,
    ));
    game.debug_set_food(Position::new(0, 0));

    assert_eq!(game.tick(), Ok(Step::Moved));
    let body: Vec<Position> = game.snake().body().iter().copied().collect();
    assert_eq!(body, vec![Position::new(200, 180), Position::new(200, 200)]);
}

#[test]
fn eating_food_grows_by_one() {
    let mut game = new_game(2);
    game.debug_set_snake(Snake::with_body(
        Position::new(100, 100),
        vec![Position::new(80, 100), Position::new(60, 100)],
        Direction::Right,
    ));
    game.debug_set_food(Position::new(120, 100));

    assert_eq!(game.tick(), Ok(Step::Ate));
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().head(), Position::new(120, 100));
    assert_eq!(game.snake().body()[3], Position::new(60, 100));
    assert_eq!(game.score(), 3);

    game.debug_set_food(Position::new(0, 0));
    assert_eq!(game.tick(), Ok(Step::Moved));
    assert_eq!(game.snake().len(), 4);
}

#[test]
fn every_wall_ends_the_game() {
    let cases = [
        (Position::new(0, 200), Direction::Left, Position::new(-20, 200)),
        (Position::new(380, 200), Direction::Right, Position::new(400, 200)),
        (Position::new(200, 0), Direction::Up, Position::new(200, -20)),
        (Position::new(200, 380), Direction::Down, Position::new(200, 400)),
    ];

    for (head, direction, expected) in cases.iter().copied() {
        let mut game = new_game(3);
        game.debug_set_snake(Snake::new(head, direction));
        game.debug_set_food(Position::new(100, 100));

        assert_eq!(game.tick(), Err(GameOver::OutOfBounds(expected)));
        assert_eq!(game.snake().head(), head, "state must not change on game over");
    }
}

#[test]
fn running_into_body_ends_the_game() {
    let mut game = new_game(4);
    // A hook: head at (100,100) moving down into (100,120), which is body.
    game.debug_set_snake(Snake::with_body(
        Position::new(100, 100),
        vec![
            Position::new(120, 100),
            Position::new(120, 120),
            Position::new(100, 120),
            Position::new(80, 120),
        ],
        Direction::Left,
    ));
    game.debug_set_food(Position::new(0, 0));

    assert!(game.set_direction(Key::ArrowDown));
    assert_eq!(game.tick(), Err(GameOver::SelfCollision(Position::new(100, 120))));
    assert_eq!(game.snake().len(), 5);
}

#[test]
fn moving_into_current_tail_cell_is_a_collision() {
    let mut game = new_game(5);
    // 2x2 loop: the next head is where the tail sits right now.
    game.debug_set_snake(Snake::with_body(
        Position::new(100, 100),
        vec![Position::new(120, 100), Position::new(120, 120), Position::new(100, 120)],
        Direction::Down,
    ));
    game.debug_set_food(Position::new(0, 0));

    assert_eq!(game.tick(), Err(GameOver::SelfCollision(Position::new(100, 120))));
}

#[test]
fn cannot_reverse_onto_the_same_axis() {
    let mut game = new_game(6);
    game.debug_set_food(Position::new(0, 0));
    assert_eq!(game.direction(), Direction::Up);

    assert!(!game.set_direction(Key::ArrowDown));
    assert_eq!(game.direction().delta(), (0, -20));

    assert!(game.set_direction(Key::ArrowLeft));
    assert_eq!(game.direction().delta(), (-20, 0));
    assert!(game.tick().is_ok());

    assert!(!game.set_direction(Key::ArrowRight));
    assert!(!game.set_direction(Key::Other));
    assert!(!game.set_direction(Key::Pause));
    assert_eq!(game.direction(), Direction::Left);
}

#[test]
fn two_quick_turns_do_not_double_back() {
    let mut game = new_game(12);
    game.debug_set_snake(Snake::with_body(
        Position::new(200, 200),
        vec![Position::new(200, 220)],
        Direction::Up,
    ));
    game.debug_set_food(Position::new(0, 0));

    assert!(game.set_direction(Key::ArrowLeft));
    assert!(!game.set_direction(Key::ArrowDown));
    assert_eq!(game.direction(), Direction::Left);

    assert_eq!(game.tick(), Ok(Step::Moved));
    assert_eq!(game.snake().head(), Position::new(180, 200));

    // After the left step, down is a legal turn again
    assert!(game.set_direction(Key::ArrowDown));
    assert_eq!(game.tick(), Ok(Step::Moved));
    assert_eq!(game.snake().head(), Position::new(180, 220));
}

#[test]
fn reset_restores_initial_state() {
    let mut game = new_game(7);
    let mut twin = new_game(7);
    assert_eq!(game.food(), twin.food());

    game.debug_set_snake(Snake::with_body(
        Position::new(0, 0),
        vec![Position::new(20, 0), Position::new(40, 0)],
        Direction::Left,
    ));
    assert!(game.tick().is_err());

    game.reset();
    let body: Vec<Position> = game.snake().body().iter().copied().collect();
    assert_eq!(body, vec![Position::new(200, 200)]);
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(game.score(), 0);
    // Reset draws fresh food: the twin's next draw on the same seed
    assert_eq!(game.food(), twin.place_food());
}

#[test]
fn food_lands_on_grid_cells() {
    let mut game = new_game(8);
    let mut seen_x = std::collections::HashSet::new();

    for _ in 0..2000 {
        let food = game.place_food();
        assert!(food.in_bounds());
        assert_eq!(food.x % 20, 0);
        assert_eq!(food.y % 20, 0);
        seen_x.insert(food.x);
    }

    // Uniform over 20 columns, so all of them show up
    assert_eq!(seen_x.len(), 20);
}

#[test]
fn same_seed_same_food() {
    let mut a = new_game(42);
    let mut b = new_game(42);
    assert_eq!(a.food(), b.food());
    for _ in 0..10 {
        assert_eq!(a.place_food(), b.place_food());
    }
}

#[test]
fn walking_across_the_board() {
    let mut game = new_game(9);
    game.debug_set_food(Position::new(0, 0));

    // Center to the top edge takes 10 steps, the 11th leaves the board
    for _ in 0..10 {
        assert!(game.tick().is_ok());
    }
    assert_eq!(game.snake().head(), Position::new(200, 0));
    assert!(matches!(game.tick(), Err(GameOver::OutOfBounds(_))));
}

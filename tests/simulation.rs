use grid_snake::game::{
    Board, Cell, Direction, GameConfig, GameEngine, GameEvent, GameState, Position, Snake,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn engine(seed: u64) -> GameEngine {
    GameEngine::new(GameConfig {
        rng_seed: Some(seed),
        ..Default::default()
    })
}

fn state(segments: &[(i32, i32)], heading: Direction, food: (i32, i32)) -> GameState {
    let snake =
        Snake::from_segments(segments.iter().map(|&(x, y)| Position::new(x, y)).collect()).unwrap();
    let mut state = GameState::new(snake, Position::new(food.0, food.1), 12);
    state.heading = heading;
    state
}

#[test]
fn eating_food_grows_and_scores() {
    let mut engine = engine(1);
    let result = engine.apply(state(&[(5, 5)], Direction::Right, (6, 5)), GameEvent::Tick);

    assert!(result.info.ate_food);
    assert_eq!(
        result.state.snake.segments(),
        &[Position::new(6, 5), Position::new(5, 5)]
    );
    assert_eq!(result.state.score, 1);
    assert!(!result.state.game_over);
    assert!(result.state.food.is_within(12));
}

#[test]
fn hitting_the_right_wall_ends_the_game() {
    let mut engine = engine(1);
    let result = engine.apply(state(&[(11, 5)], Direction::Right, (2, 2)), GameEvent::Tick);

    assert!(result.state.game_over);
    assert_eq!(result.state.snake.segments(), &[Position::new(11, 5)]);
}

#[test]
fn arrow_down_while_heading_up_is_ignored() {
    let mut engine = engine(1);
    let result = engine.apply(
        state(&[(5, 5)], Direction::Up, (2, 2)),
        GameEvent::Turn(Direction::Down),
    );

    assert_eq!(result.state.heading, Direction::Up);
    assert_eq!(result.state.pending_heading, None);

    let moved = engine.apply(result.state, GameEvent::Tick).state;
    assert_eq!(moved.snake.head(), Position::new(5, 4));
}

#[test]
fn reset_restores_the_starting_position() {
    let mut engine = engine(9);
    for _ in 0..20 {
        let mut finished = state(&[(0, 0), (0, 1)], Direction::Up, (3, 3));
        finished.score = 12;
        finished.game_over = true;

        let fresh = engine.apply(finished, GameEvent::Reset).state;
        assert_eq!(fresh.snake.segments(), &[Position::new(5, 5)]);
        assert_eq!(fresh.heading, Direction::Right);
        assert_eq!(fresh.pending_heading, None);
        assert_eq!(fresh.score, 0);
        assert!(!fresh.game_over);
        assert!(fresh.food.is_within(12));
    }
}

#[test]
fn food_can_land_under_the_snake() {
    // A snake filling all but one cell eats the last free one, so the
    // regenerated food has nowhere to go but under the body.
    let mut segments = Vec::new();
    for y in 0..4 {
        let row: Vec<i32> = if y % 2 == 0 { (0..4).collect() } else { (0..4).rev().collect() };
        for x in row {
            segments.push((x, y));
        }
    }
    segments.reverse();
    let food = segments.remove(0);

    let snake =
        Snake::from_segments(segments.iter().map(|&(x, y)| Position::new(x, y)).collect()).unwrap();
    let mut full = GameState::new(snake, Position::new(food.0, food.1), 4);
    full.heading = Direction::Left;

    let mut engine = GameEngine::new(GameConfig {
        board_size: 4,
        start: Position::new(0, 0),
        initial_food: Position::new(0, 0),
        rng_seed: Some(2),
        ..Default::default()
    });
    let result = engine.apply(full, GameEvent::Tick);

    assert!(result.info.ate_food);
    assert_eq!(result.state.snake.len(), 16);
    assert!(result.state.snake.contains(result.state.food));

    let board = Board::project(&result.state.snake, result.state.food, 4);
    assert_eq!(board.count(Cell::SnakeBody), 16);
    assert_eq!(board.count(Cell::Food), 0);
}

#[test]
fn random_play_keeps_invariants() {
    let mut engine = engine(42);
    let mut rng = StdRng::seed_from_u64(4242);
    let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
    let mut current = engine.initial_state();
    let mut games = 0;

    for _ in 0..20_000 {
        if current.game_over {
            let frozen = current.clone();
            let after = engine.apply(current.clone(), GameEvent::Tick).state;
            assert_eq!(after, frozen);

            games += 1;
            current = engine.apply(current, GameEvent::Reset).state;
            continue;
        }

        if rng.gen_bool(0.3) {
            let direction = directions[rng.gen_range(0..directions.len())];
            let heading = current.heading;
            current = engine.apply(current, GameEvent::Turn(direction)).state;
            if heading.is_opposite(direction) {
                assert_ne!(current.pending_heading, Some(direction));
            }
            assert_eq!(current.heading, heading);
        }

        let before = current.clone();
        let result = engine.apply(current, GameEvent::Tick);
        current = result.state;

        if current.game_over {
            assert_eq!(current.snake, before.snake);
            assert_eq!(current.score, before.score);
        } else if result.info.ate_food {
            assert_eq!(current.snake.len(), before.snake.len() + 1);
            assert_eq!(current.score, before.score + 1);
        } else {
            assert_eq!(current.snake.len(), before.snake.len());
            assert_eq!(current.score, before.score);
        }

        assert!(!current.snake.is_empty());
        for segment in current.snake.segments() {
            assert!(current.is_in_bounds(*segment));
        }
        assert!(current.is_in_bounds(current.food));
    }

    assert!(games > 0);
}

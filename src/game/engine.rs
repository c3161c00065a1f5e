use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, trace};

use super::{
    config::GameConfig,
    event::{Direction, GameEvent},
    food,
    state::{CollisionType, GameState, Position, Snake},
};

/// Information about a transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// The state after the event
    pub state: GameState,
    /// What happened along the way
    pub info: StepInfo,
}

impl StepResult {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            info: StepInfo::default(),
        }
    }
}

/// The game engine: turns a state and an event into the next state
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine, seeding food placement from the config when it
    /// carries a seed
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// State at program start, with the configured initial food
    pub fn initial_state(&self) -> GameState {
        GameState::new(
            Snake::new(self.config.start),
            self.config.initial_food,
            self.config.board_size,
        )
    }

    /// Fresh game with randomly placed food
    pub fn reset(&mut self) -> GameState {
        let food = self.spawn_food(self.config.board_size);
        GameState::new(Snake::new(self.config.start), food, self.config.board_size)
    }

    /// Apply one event to `state`
    pub fn apply(&mut self, state: GameState, event: GameEvent) -> StepResult {
        match event {
            GameEvent::Tick => self.tick(state),
            GameEvent::Turn(direction) => Self::turn(state, direction),
            GameEvent::Reset => StepResult::unchanged(self.reset()),
        }
    }

    /// Record a heading request for the next tick.
    ///
    /// The guard compares against the committed heading only, so a request
    /// still pending from an earlier key press never unlocks a reversal.
    fn turn(mut state: GameState, direction: Direction) -> StepResult {
        if state.game_over {
            return StepResult::unchanged(state);
        }

        if state.heading.is_opposite(direction) {
            trace!(?direction, heading = ?state.heading, "rejected reversing turn");
            return StepResult::unchanged(state);
        }

        state.pending_heading = Some(direction);
        StepResult::unchanged(state)
    }

    /// Move the snake one cell
    fn tick(&mut self, mut state: GameState) -> StepResult {
        if state.game_over {
            return StepResult::unchanged(state);
        }

        if let Some(direction) = state.pending_heading.take() {
            state.heading = direction;
        }

        let new_head = state.snake.head().moved_in_direction(state.heading);

        if let Some(collision_type) = Self::check_collision(&state, new_head) {
            state.game_over = true;

            return StepResult {
                state,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..StepInfo::default()
                },
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);
        state.steps += 1;

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(state.board_size);
            debug!(score = state.score, food = ?state.food, "food eaten");
        }

        StepResult {
            state,
            info: StepInfo {
                ate_food,
                ..StepInfo::default()
            },
        }
    }

    fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn spawn_food(&mut self, board_size: usize) -> Position {
        food::random_position(&mut self.rng, board_size)
    }
}

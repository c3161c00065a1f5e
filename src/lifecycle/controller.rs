use std::time::Duration;

use tracing::info;

use super::ticker::TickTimer;
use crate::game::{
    Board, ConfigError, Direction, GameConfig, GameEngine, GameEvent, GameState, StepInfo,
};

/// Owns the one live [`GameState`], its projected [`Board`] and the tick
/// timer.
///
/// Every change goes through [`handle`](Self::handle): the engine produces
/// the next state, the board is re-derived, and the timer follows the
/// Running/GameOver state in the same step.
pub struct GameController {
    engine: GameEngine,
    state: GameState,
    board: Board,
    timer: TickTimer,
}

impl GameController {
    /// Validate `config` and start a running game with its initial food
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let engine = GameEngine::new(config);
        let state = engine.initial_state();
        let board = Board::project(&state.snake, state.food, state.board_size);
        let mut timer = TickTimer::new(engine.config().tick_period());
        timer.start();

        info!(
            board_size = state.board_size,
            tick_ms = engine.config().tick_period_ms,
            "game started"
        );

        Ok(Self {
            engine,
            state,
            board,
            timer,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the tick loop is active
    pub fn is_ticking(&self) -> bool {
        self.timer.is_running()
    }

    pub fn tick_period(&self) -> Duration {
        self.timer.period()
    }

    /// Apply one event and republish the result
    pub fn handle(&mut self, event: GameEvent) -> StepInfo {
        let was_over = self.state.game_over;
        let result = self.engine.apply(self.state.clone(), event);
        self.publish(result.state);

        if event == GameEvent::Reset {
            self.timer.start();
            info!(food = ?self.state.food, "game reset");
        } else if !was_over && self.state.game_over {
            self.timer.stop();
            info!(
                score = self.state.score,
                length = self.state.snake.len(),
                collision = ?result.info.collision_type,
                "game over"
            );
        }

        result.info
    }

    pub fn tick(&mut self) -> StepInfo {
        self.handle(GameEvent::Tick)
    }

    pub fn turn(&mut self, direction: Direction) -> StepInfo {
        self.handle(GameEvent::Turn(direction))
    }

    /// Start a fresh game. Works in any state.
    pub fn reset(&mut self) {
        self.handle(GameEvent::Reset);
    }

    /// Resolves when the next tick is due; never resolves after game over
    pub async fn next_tick(&mut self) {
        self.timer.tick().await;
    }

    /// Change the tick period, superseding the current schedule
    pub fn set_tick_period(&mut self, period: Duration) -> Result<(), ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }

        self.timer.set_period(period);
        info!(tick_ms = period.as_millis() as u64, "tick period changed");
        Ok(())
    }

    fn publish(&mut self, state: GameState) {
        let moved = state.snake != self.state.snake
            || state.food != self.state.food
            || state.board_size != self.state.board_size;

        self.state = state;

        if moved {
            self.board = Board::project(&self.state.snake, self.state.food, self.state.board_size);
        }
    }
}

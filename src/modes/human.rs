use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::debug;

use crate::game::GameConfig;
use crate::input::{InputHandler, KeyAction};
use crate::lifecycle::GameController;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    controller: GameController,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    needs_redraw: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let controller = GameController::new(config).context("Invalid game configuration")?;

        Ok(Self {
            controller,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            needs_redraw: true,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The board only changes on events and ticks; this keeps the clock moving
        let mut clock_timer = interval(Duration::from_secs(1));

        loop {
            if self.needs_redraw {
                self.draw(terminal)?;
            }

            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = self.controller.next_tick() => {
                    self.update_game();
                }

                _ = clock_timer.tick() => {
                    if !self.controller.state().game_over {
                        self.metrics.update();
                        self.needs_redraw = true;
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.render(
                    frame,
                    self.controller.state(),
                    self.controller.board(),
                    &self.metrics,
                );
            })
            .context("Failed to draw frame")?;
        self.needs_redraw = false;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        self.controller.turn(direction);
                    }
                    KeyAction::Restart => {
                        if self.controller.state().game_over {
                            self.reset_game();
                        }
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    fn update_game(&mut self) {
        let info = self.controller.tick();

        if info.collision_type.is_some() {
            self.metrics.on_game_over(self.controller.state().score);
        }

        self.needs_redraw = true;
    }

    fn reset_game(&mut self) {
        self.controller.reset();
        self.metrics.on_game_start();
        self.needs_redraw = true;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

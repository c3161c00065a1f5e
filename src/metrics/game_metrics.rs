use std::time::{Duration, Instant};

/// In-memory stats for the current terminal session; nothing is saved
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Best score since the program started
    pub best_score: u32,
    pub games_played: u32,
    clock_running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            clock_running: true,
        }
    }

    /// Refresh the clock; frozen once the game is over
    pub fn update(&mut self) {
        if self.clock_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.clock_running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.clock_running = false;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

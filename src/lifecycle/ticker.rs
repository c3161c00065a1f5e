use std::future;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Periodic tick source that can be stopped, restarted and re-timed.
///
/// At most one [`Interval`] exists at a time. The interval is built on the
/// first poll after [`start`](Self::start), so the first tick lands one full
/// period after the loop begins waiting, and constructing a timer does not
/// need a runtime.
pub struct TickTimer {
    period: Duration,
    running: bool,
    interval: Option<Interval>,
}

impl TickTimer {
    /// A stopped timer. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            running: false,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin ticking from now, discarding any schedule already in place
    pub fn start(&mut self) {
        self.running = true;
        self.interval = None;
    }

    /// Cancel the schedule; [`tick`](Self::tick) then never resolves
    pub fn stop(&mut self) {
        self.running = false;
        self.interval = None;
    }

    /// Replace the period. A running timer drops its old interval and
    /// restarts with the new one.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
        if self.running {
            self.start();
        }
    }

    /// Wait for the next tick. Pends forever while stopped.
    pub async fn tick(&mut self) {
        if !self.running {
            return future::pending().await;
        }

        let period = self.period;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
    }
}

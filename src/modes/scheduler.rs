use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fixed-period tick source that can be re-armed or stopped between ticks.
///
/// While stopped, `tick` never completes, so it can sit in a `select!`
/// next to the input and render branches without special-casing.
pub struct TickScheduler {
    timer: Option<Interval>,
}

impl TickScheduler {
    pub fn stopped() -> Self {
        Self { timer: None }
    }

    /// Start ticking every `period`, replacing any previous timer.
    ///
    /// The first tick fires one full period from now.
    pub fn arm(&mut self, period: Duration) {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.timer.as_ref().map(Interval::period)
    }

    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::stopped()
    }
}

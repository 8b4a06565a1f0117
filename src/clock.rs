use std::thread::sleep;
use std::time::{Duration, Instant};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Paces the game loop.
pub trait Scheduler {
    /// Blocks until the next tick is due.
    fn wait_for_tick(&mut self);
}

/// Ticks every `period`. A tick that overruns its slot pushes the next
/// deadline a full period past the moment it finished, so ticks never bunch up.
pub struct FixedInterval {
    period: Duration,
    next: Option<Instant>,
}

impl FixedInterval {
    pub fn new(period: Duration) -> Self {
        FixedInterval { period, next: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Scheduler for FixedInterval {
    fn wait_for_tick(&mut self) {
        let period = self.period;
        let now = Instant::now();
        let deadline = *self.next.get_or_insert(now + period);

        if deadline > now {
            sleep(deadline - now);
        }

        let fired = Instant::now();
        self.next = Some(if deadline + period > fired { deadline + period } else { fired + period });
    }
}

use std::thread;
use std::time::{Duration, Instant};

// Paces the desktop frontend to roughly 60 frames per second. Not used by the headless
// test-harness binary, which runs as fast as possible.
pub struct Clock {
    period: Duration,
    next_tick: Instant,
}

impl Clock {
    pub fn power_up(hz: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / f64::from(hz));
        Self { period, next_tick: Instant::now() + period }
    }

    // Blocks until the next tick is due, then schedules the following one. If the caller falls
    // behind (a slow frame), the next tick is immediately due rather than compounding the delay.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            thread::sleep(self.next_tick - now);
        }
        self.next_tick = std::cmp::max(self.next_tick + self.period, Instant::now());
    }
}

//! Fixed-step frame clock for the binary loop.
//!
//! Wall-clock time is accumulated and handed out in whole ticks; the
//! remainder carries into the next frame so slow frames do not lose time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    lag: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step: Duration::from_millis(step_ms.max(1) as u64),
            lag: Duration::ZERO,
            last: Instant::now(),
        }
    }

    /// Whole ticks elapsed since the previous call.
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        self.accumulate(elapsed)
    }

    /// Add `elapsed` to the carried remainder and take out whole ticks.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.lag = self.lag.saturating_add(elapsed);
        let steps = self.lag.as_nanos() / self.step.as_nanos();
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        self.lag = self.lag.saturating_sub(self.step.saturating_mul(steps));
        steps
    }

    /// Time left until the next whole tick is due.
    pub fn until_next(&self) -> Duration {
        self.step
            .saturating_sub(self.lag.saturating_add(self.last.elapsed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_carries_into_the_next_frame() {
        let mut clock = FrameClock::new(16);
        assert_eq!(clock.accumulate(Duration::from_millis(10)), 0);
        assert_eq!(clock.accumulate(Duration::from_millis(10)), 1);
        // 4 ms left over + 28 ms
        assert_eq!(clock.accumulate(Duration::from_millis(28)), 2);
        assert_eq!(clock.accumulate(Duration::ZERO), 0);
    }

    #[test]
    fn slow_frame_yields_every_elapsed_tick() {
        let mut clock = FrameClock::new(16);
        assert_eq!(clock.accumulate(Duration::from_millis(100)), 6);
        assert_eq!(clock.accumulate(Duration::from_millis(12)), 1);
    }

    #[test]
    fn until_next_never_exceeds_one_step() {
        let mut clock = FrameClock::new(16);
        clock.accumulate(Duration::from_millis(40));
        assert!(clock.until_next() <= Duration::from_millis(8));
    }
}

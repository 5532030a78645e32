use std::time::{Duration, Instant};

/// # Clock
/// Counts whole ticks of a fixed-rate clock.
///
/// Ticks are measured from a fixed start rather than from the last call, so
/// time lost to a slow frame is made up by reporting several ticks at once.
pub struct Clock {
    start: Instant,
    rate: u32,
    ticks_done: u64,
}

impl Clock {
    /// # Arguments
    /// * `rate` ticks per second
    /// * `start` when tick 0 happened
    pub fn new(rate: u32, start: Instant) -> Self {
        Clock {
            start,
            rate: rate.max(1),
            ticks_done: 0,
        }
    }

    /// The time between two ticks
    pub fn period(&self) -> Duration {
        Duration::from_secs(1) / self.rate
    }

    /// Ticks that have elapsed by `now` but haven't been reported yet
    pub fn ticks(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.start);
        let total = (elapsed.as_secs_f64() * f64::from(self.rate)) as u64;
        let ticks = total.saturating_sub(self.ticks_done);
        self.ticks_done += ticks;
        ticks as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ticks_before_first_period() {
        let start = Instant::now();
        let mut clock = Clock::new(60, start);
        assert_eq!(clock.ticks(start), 0);
        assert_eq!(clock.ticks(start + Duration::from_millis(10)), 0);
    }

    #[test]
    fn test_reports_each_tick_once() {
        let start = Instant::now();
        let mut clock = Clock::new(10, start);
        assert_eq!(clock.ticks(start + Duration::from_millis(150)), 1);
        assert_eq!(clock.ticks(start + Duration::from_millis(180)), 0);
        assert_eq!(clock.ticks(start + Duration::from_millis(210)), 1);
    }

    #[test]
    fn test_catches_up_after_slow_frame() {
        let start = Instant::now();
        let mut clock = Clock::new(60, start);
        assert_eq!(clock.ticks(start + Duration::from_millis(1010)), 60);
    }

    #[test]
    fn test_period() {
        let clock = Clock::new(50, Instant::now());
        assert_eq!(clock.period(), Duration::from_millis(20));
    }
}

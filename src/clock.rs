/*
 * Clock Module
 *
 * Measures wall-clock time between consecutive frames.
 */

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    first_delta: Duration,
}

impl FrameClock {
    // `first_delta` is reported for the very first frame, which has no predecessor
    pub fn new(first_delta: Duration) -> Self {
        Self {
            last_tick: None,
            first_delta,
        }
    }

    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    // Time elapsed since the previous tick. A clock that goes backwards
    // reports zero rather than panicking.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let delta = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => self.first_delta,
        };
        self.last_tick = Some(now);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_reports_first_delta() {
        let mut clock = FrameClock::new(Duration::from_millis(20));
        assert_eq!(clock.tick_at(Instant::now()), Duration::from_millis(20));
    }

    #[test]
    fn later_ticks_measure_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(20));
        clock.tick_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_millis(7)), Duration::from_millis(7));
        assert_eq!(clock.tick_at(start + Duration::from_millis(30)), Duration::from_millis(23));
    }

    #[test]
    fn backwards_time_reports_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::new(Duration::from_millis(20));
        clock.tick_at(start);
        assert_eq!(clock.tick_at(start - Duration::from_millis(5)), Duration::ZERO);
    }
}

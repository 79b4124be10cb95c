//! Wall-clock pipe spawn cadence.

use std::time::Duration;

/// Accumulates frame time and fires once per interval.
///
/// Serviced once per frame; a frame longer than several intervals still
/// fires only once, and the surplus whole intervals are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimer {
    interval: Duration,
    elapsed: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    /// Add `dt` and report whether a spawn is due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.interval.is_zero() {
            return true;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        let interval_nanos = self.interval.as_nanos();
        let remainder = self.elapsed.as_nanos() % interval_nanos;
        self.elapsed = Duration::from_nanos(remainder as u64);
        true
    }

    /// Start a fresh interval.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_full_interval() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        let frame = Duration::from_millis(16);
        let mut fired_at = None;
        for tick in 1..=200 {
            if timer.advance(frame) {
                fired_at = Some(tick);
                break;
            }
        }
        // 94 * 16ms = 1504ms is the first frame past 1500ms.
        assert_eq!(fired_at, Some(94));
        assert_eq!(timer.elapsed(), Duration::from_millis(4));
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert!(timer.advance(Duration::from_millis(5000)));
        assert_eq!(timer.elapsed(), Duration::from_millis(500));
        assert!(!timer.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_reset_restarts_interval() {
        let mut timer = SpawnTimer::new(Duration::from_millis(1500));
        assert!(!timer.advance(Duration::from_millis(1400)));
        timer.reset();
        assert!(!timer.advance(Duration::from_millis(1400)));
        assert!(timer.advance(Duration::from_millis(100)));
    }
}

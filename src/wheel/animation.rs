//! Rotation easing for an in-flight spin.

use std::time::{Duration, Instant};

/// Cubic ease-out: fast start, gentle stop.
///
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A rotation from one visual angle to another over a fixed duration.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Animation {
    /// Start a new animation at `started_at`.
    ///
    pub fn new(from: f64, to: f64, started_at: Instant, duration: Duration) -> Self {
        Animation {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Fraction of the duration elapsed at `now`, in [0, 1].
    ///
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased rotation at `now`.
    ///
    pub fn angle_at(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_out(self.progress(now))
    }
}

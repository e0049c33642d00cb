//! Clock and interpolation helpers for the terminal stage

use std::time::Instant;

use scrolly_core::Millis;

/// Millisecond clock anchored when the stage starts
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Milliseconds since the clock started
    #[inline]
    pub fn now(&self) -> Millis {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}

/// Animation progress in [0.0, 1.0]
#[inline]
pub fn progress(start: Millis, duration_ms: u64, now: Millis) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start) as f64;
    (elapsed / duration_ms as f64).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(200.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        assert!((progress(100, 0, 100) - 1.0).abs() < 0.001);
        assert!((progress(100, 200, 50) - 0.0).abs() < 0.001);
        assert!((progress(100, 200, 200) - 0.5).abs() < 0.001);
        assert!((progress(100, 200, 900) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = Clock::start();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}

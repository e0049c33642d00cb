//! Gesture accumulation: wheel ticks and touch drags into frame steps

/// Step direction along the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Direction of a signed value; zero has none
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Direction::Forward)
        } else if value < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    #[inline]
    pub fn unit(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Result of feeding one gesture unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceDecision {
    /// Below the hold threshold; the input is swallowed
    Absorbed,
    /// Threshold crossed, step one frame
    Advance(Direction),
    /// Threshold crossed at an end of the timeline
    BoundaryReached(Direction),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureAccumulator {
    total: i64,
}

impl GestureAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending gesture units (signed)
    #[inline]
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }

    /// Add one unit in `direction` while the cursor sits on `frame`
    ///
    /// `holds` is the per-frame hold table; its length defines the timeline.
    /// On a crossing the remainder keeps the sign of the running total and
    /// the magnitude `|total| mod hold`, so both directions behave alike.
    pub fn accumulate(&mut self, direction: Direction, frame: usize, holds: &[u32]) -> AdvanceDecision {
        let max_frame = holds.len().saturating_sub(1);
        let frame = frame.min(max_frame);
        let hold = i64::from(holds.get(frame).copied().unwrap_or(1).max(1));

        self.total += i64::from(direction.unit());

        if self.total.abs() < hold {
            return AdvanceDecision::Absorbed;
        }

        let effective = if self.total > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.total = self.total.signum() * (self.total.abs() % hold);

        match effective {
            Direction::Forward if frame >= max_frame => AdvanceDecision::BoundaryReached(effective),
            Direction::Backward if frame == 0 => AdvanceDecision::BoundaryReached(effective),
            _ => AdvanceDecision::Advance(effective),
        }
    }
}

/// Turns touch-move positions into gesture units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchTracker {
    anchor_y: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f64) {
        self.anchor_y = Some(y);
    }

    pub fn end(&mut self) {
        self.anchor_y = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.anchor_y.is_some()
    }

    /// Direction of travel since the anchor once it exceeds `dead_zone`
    ///
    /// Dragging up (finger moving toward the top) advances the timeline.
    /// The anchor only moves when a unit is produced.
    pub fn track(&mut self, y: f64, dead_zone: f64) -> Option<Direction> {
        let anchor = self.anchor_y?;
        let diff = anchor - y;
        if diff.abs() < dead_zone {
            return None;
        }
        self.anchor_y = Some(y);
        Direction::from_sign(diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FWD: Direction = Direction::Forward;
    const BACK: Direction = Direction::Backward;

    #[test]
    fn test_three_units_cross_hold_of_three() {
        let holds = [3, 3, 3];
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.total(), 2);
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Advance(FWD));
        assert_eq!(acc.total(), 0);
    }

    #[test]
    fn test_backward_mirrors_forward() {
        let holds = [3, 3, 3];
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.accumulate(BACK, 2, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.accumulate(BACK, 2, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.total(), -2);
        assert_eq!(acc.accumulate(BACK, 2, &holds), AdvanceDecision::Advance(BACK));
        assert_eq!(acc.total(), 0);
    }

    #[test]
    fn test_remainder_keeps_sign_when_hold_shrinks() {
        // pending units built on a slow frame carry over to a faster one
        let holds = [5, 2];
        let mut acc = GestureAccumulator::new();
        for _ in 0..4 {
            acc.accumulate(BACK, 0, &holds);
        }
        assert_eq!(acc.total(), -4);
        // -5 on hold 2: one crossing, remainder -1
        assert_eq!(acc.accumulate(BACK, 1, &holds), AdvanceDecision::Advance(BACK));
        assert_eq!(acc.total(), -1);

        let mut acc = GestureAccumulator::new();
        for _ in 0..4 {
            acc.accumulate(FWD, 0, &holds);
        }
        assert_eq!(acc.accumulate(FWD, 0, &[5, 5, 2]), AdvanceDecision::Advance(FWD));
        assert_eq!(acc.total(), 0);
        let mut acc = GestureAccumulator { total: 4 };
        assert_eq!(acc.accumulate(FWD, 0, &[2, 2]), AdvanceDecision::Advance(FWD));
        assert_eq!(acc.total(), 1);
    }

    #[test]
    fn test_hold_beyond_i32_range_still_absorbs() {
        let holds = [3_000_000_000, 1];
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Absorbed);
        assert_eq!(acc.total(), 2);
    }

    #[test]
    fn test_boundaries() {
        let holds = [1, 1];
        let mut acc = GestureAccumulator::new();
        assert_eq!(acc.accumulate(FWD, 1, &holds), AdvanceDecision::BoundaryReached(FWD));
        assert_eq!(acc.accumulate(BACK, 0, &holds), AdvanceDecision::BoundaryReached(BACK));
        assert_eq!(acc.accumulate(FWD, 0, &holds), AdvanceDecision::Advance(FWD));
    }

    #[test]
    fn test_direction_change_cancels_progress() {
        let holds = [3, 3];
        let mut acc = GestureAccumulator::new();
        acc.accumulate(FWD, 0, &holds);
        acc.accumulate(FWD, 0, &holds);
        acc.accumulate(BACK, 0, &holds);
        assert_eq!(acc.total(), 1);
    }

    #[test]
    fn test_touch_dead_zone() {
        let mut touch = TouchTracker::default();
        assert_eq!(touch.track(100.0, 6.0), None);

        touch.start(100.0);
        assert_eq!(touch.track(97.0, 6.0), None);
        assert_eq!(touch.track(94.0, 6.0), Some(FWD));
        // anchor moved to 94
        assert_eq!(touch.track(96.0, 6.0), None);
        assert_eq!(touch.track(101.0, 6.0), Some(BACK));

        touch.end();
        assert!(!touch.is_active());
        assert_eq!(touch.track(0.0, 6.0), None);
    }
}

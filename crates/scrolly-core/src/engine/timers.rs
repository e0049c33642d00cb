//! Delayed transitions driven by the host clock

use crate::storyboard::SegmentId;

/// Host timestamp in milliseconds (any monotonic origin)
pub type Millis = u64;

/// A transition due at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delayed<T> {
    pub due: Millis,
    pub payload: T,
}

impl<T> Delayed<T> {
    pub fn after(now: Millis, delay_ms: u64, payload: T) -> Self {
        Self {
            due: now.saturating_add(delay_ms),
            payload,
        }
    }

    #[inline]
    pub fn is_due(&self, now: Millis) -> bool {
        now >= self.due
    }
}

/// Pending delayed transitions; scheduling a slot supersedes its previous entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayedTransitions {
    pub caption_reveal: Option<Delayed<SegmentId>>,
    pub caption_collapse: Option<Delayed<()>>,
    pub scroll_settle: Option<Delayed<()>>,
}

impl DelayedTransitions {
    /// Take the slot's payload if it is due
    pub fn take_due<T: Copy>(slot: &mut Option<Delayed<T>>, now: Millis) -> Option<T> {
        if slot.as_ref().is_some_and(|delayed| delayed.is_due(now)) {
            slot.take().map(|delayed| delayed.payload)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.caption_reveal.is_none() && self.caption_collapse.is_none() && self.scroll_settle.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due() {
        let mut slot = Some(Delayed::after(100, 200, 7usize));
        assert_eq!(DelayedTransitions::take_due(&mut slot, 299), None);
        assert!(slot.is_some());
        assert_eq!(DelayedTransitions::take_due(&mut slot, 300), Some(7));
        assert!(slot.is_none());
    }

    #[test]
    fn test_rescheduling_supersedes() {
        let mut timers = DelayedTransitions::default();
        timers.caption_reveal = Some(Delayed::after(0, 200, 1));
        timers.caption_reveal = Some(Delayed::after(150, 200, 2));
        assert_eq!(DelayedTransitions::take_due(&mut timers.caption_reveal, 250), None);
        assert_eq!(DelayedTransitions::take_due(&mut timers.caption_reveal, 350), Some(2));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_saturating_deadline() {
        let delayed = Delayed::after(u64::MAX - 1, 10, ());
        assert_eq!(delayed.due, u64::MAX);
    }
}

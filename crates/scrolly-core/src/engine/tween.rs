//! Frame tweener: one frame per animation tick toward a target

use super::accumulator::Direction;
use super::cursor::TimelineCursor;

/// What to do once a tween lands on its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenFollowUp {
    #[default]
    Nothing,
    /// Pairs with a programmatic scroll in continuous mode
    SettleProgrammaticScroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveTween {
    target: usize,
    follow_up: TweenFollowUp,
}

/// Outcome of starting a tween
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStart {
    /// Already on the target; the follow-up is due now
    Immediate(TweenFollowUp),
    Running,
}

/// Outcome of one animation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStep {
    Idle,
    Moved,
    Arrived(TweenFollowUp),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tweener {
    active: Option<ActiveTween>,
}

impl Tweener {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<usize> {
        self.active.map(|t| t.target)
    }

    /// Start toward `target`, preempting any running tween
    pub fn start(&mut self, target: usize, cursor: &TimelineCursor, follow_up: TweenFollowUp) -> TweenStart {
        let target = target.min(cursor.max_frame());
        if let Some(previous) = self.active.take() {
            tracing::debug!(previous = previous.target, target, "Tween preempted");
        }

        if target == cursor.frame() {
            return TweenStart::Immediate(follow_up);
        }

        self.active = Some(ActiveTween { target, follow_up });
        TweenStart::Running
    }

    /// Advance the cursor one frame toward the target
    pub fn step(&mut self, cursor: &mut TimelineCursor) -> TweenStep {
        let Some(tween) = self.active else {
            return TweenStep::Idle;
        };

        let direction = if tween.target > cursor.frame() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if tween.target != cursor.frame() {
            cursor.step(direction);
        }

        if cursor.frame() == tween.target {
            self.active = None;
            TweenStep::Arrived(tween.follow_up)
        } else {
            TweenStep::Moved
        }
    }

    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_one_frame_per_tick() {
        let mut cursor = TimelineCursor::new(10);
        let mut tweener = Tweener::default();
        assert_eq!(tweener.start(3, &cursor, TweenFollowUp::Nothing), TweenStart::Running);

        assert_eq!(tweener.step(&mut cursor), TweenStep::Moved);
        assert_eq!(cursor.frame(), 1);
        assert_eq!(tweener.step(&mut cursor), TweenStep::Moved);
        assert_eq!(cursor.frame(), 2);
        assert_eq!(tweener.step(&mut cursor), TweenStep::Arrived(TweenFollowUp::Nothing));
        assert_eq!(cursor.frame(), 3);
        assert_eq!(tweener.step(&mut cursor), TweenStep::Idle);
    }

    #[test]
    fn test_backward_tween() {
        let mut cursor = TimelineCursor::new(10);
        cursor.set(5);
        let mut tweener = Tweener::default();
        tweener.start(3, &cursor, TweenFollowUp::SettleProgrammaticScroll);
        assert_eq!(tweener.step(&mut cursor), TweenStep::Moved);
        assert_eq!(
            tweener.step(&mut cursor),
            TweenStep::Arrived(TweenFollowUp::SettleProgrammaticScroll)
        );
        assert_eq!(cursor.frame(), 3);
    }

    #[test]
    fn test_same_target_completes_immediately() {
        let cursor = TimelineCursor::new(10);
        let mut tweener = Tweener::default();
        assert_eq!(
            tweener.start(0, &cursor, TweenFollowUp::SettleProgrammaticScroll),
            TweenStart::Immediate(TweenFollowUp::SettleProgrammaticScroll)
        );
        assert!(!tweener.is_active());
    }

    #[test]
    fn test_new_request_preempts() {
        let mut cursor = TimelineCursor::new(10);
        let mut tweener = Tweener::default();
        tweener.start(8, &cursor, TweenFollowUp::Nothing);
        tweener.step(&mut cursor);
        tweener.start(0, &cursor, TweenFollowUp::Nothing);
        assert_eq!(tweener.target(), Some(0));
        assert_eq!(tweener.step(&mut cursor), TweenStep::Arrived(TweenFollowUp::Nothing));
        assert_eq!(cursor.frame(), 0);
    }

    #[test]
    fn test_target_is_clamped() {
        let cursor = TimelineCursor::new(4);
        let mut tweener = Tweener::default();
        tweener.start(40, &cursor, TweenFollowUp::Nothing);
        assert_eq!(tweener.target(), Some(4));
    }
}

//! Virtual page scroll for previewing continuous mode
//!
//! The terminal has no document to scroll, so the stage keeps a page offset
//! in pixels. Smooth scrolls run at a constant rate over a fixed duration and
//! report settlement once they land.

use scrolly_core::Millis;

use crate::timing::{lerp, progress};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveScroll {
    start: Millis,
    from: f64,
    to: f64,
}

/// What changed since the previous [`PageScroller::update`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageUpdate {
    /// The offset moved; the host should emit a scroll event
    pub moved: bool,
    /// A smooth scroll finished or was interrupted
    pub settled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageScroller {
    offset: f64,
    max_offset: f64,
    duration_ms: u64,
    animation: Option<ActiveScroll>,
    /// Offset last reported through `update`
    reported: f64,
    settle_pending: bool,
}

impl PageScroller {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            duration_ms,
            animation: None,
            reported: 0.0,
            settle_pending: false,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while there is movement or a settle signal left to report
    pub fn needs_update(&self) -> bool {
        self.animation.is_some()
            || self.settle_pending
            || (self.offset - self.reported).abs() > f64::EPSILON
    }

    /// Scroll position as a fraction of the page, for the scrollbar
    pub fn ratio(&self) -> f64 {
        if self.max_offset <= 0.0 {
            0.0
        } else {
            (self.offset / self.max_offset).clamp(0.0, 1.0)
        }
    }

    /// Resize the page; the offset is clamped into the new extent
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.offset = self.clamp(self.offset);
        if let Some(animation) = &mut self.animation {
            animation.to = animation.to.clamp(0.0, self.max_offset);
        }
    }

    /// Instant programmatic scroll
    pub fn jump_to(&mut self, offset: f64) {
        self.interrupt();
        self.offset = self.clamp(offset);
    }

    /// Smooth programmatic scroll
    pub fn animate_to(&mut self, offset: f64, now: Millis) {
        let to = self.clamp(offset);
        if self.duration_ms == 0 || (to - self.offset).abs() < 0.5 {
            self.animation = None;
            self.offset = to;
            self.settle_pending = true;
            return;
        }
        self.animation = Some(ActiveScroll {
            start: now,
            from: self.offset,
            to,
        });
    }

    /// User scroll by `delta` pixels; interrupts a running smooth scroll
    pub fn scroll_by(&mut self, delta: f64) {
        self.interrupt();
        self.offset = self.clamp(self.offset + delta);
    }

    /// Advance the animation to `now`
    pub fn update(&mut self, now: Millis) -> PageUpdate {
        let mut settled = std::mem::take(&mut self.settle_pending);

        if let Some(animation) = self.animation {
            let t = progress(animation.start, self.duration_ms, now);
            self.offset = lerp(animation.from, animation.to, t);
            if t >= 1.0 {
                self.offset = animation.to;
                self.animation = None;
                settled = true;
            }
        }

        let moved = (self.offset - self.reported).abs() > f64::EPSILON;
        self.reported = self.offset;
        PageUpdate { moved, settled }
    }

    fn interrupt(&mut self) {
        if self.animation.take().is_some() {
            self.settle_pending = true;
        }
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> PageScroller {
        let mut page = PageScroller::new(300);
        page.set_max_offset(1000.0);
        page
    }

    #[test]
    fn test_constant_rate_animation() {
        let mut page = scroller();
        page.animate_to(600.0, 1000);
        assert!(page.is_animating());

        let update = page.update(1100);
        assert!(update.moved && !update.settled);
        assert!((page.offset() - 200.0).abs() < 0.001);

        page.update(1200);
        assert!((page.offset() - 400.0).abs() < 0.001);

        let update = page.update(1300);
        assert!(update.moved && update.settled);
        assert!((page.offset() - 600.0).abs() < 0.001);
        assert!(!page.is_animating());

        assert_eq!(page.update(1400), PageUpdate::default());
    }

    #[test]
    fn test_jump_reports_move_without_settle() {
        let mut page = scroller();
        page.jump_to(250.0);
        let update = page.update(0);
        assert!(update.moved);
        assert!(!update.settled);
        assert!(!page.needs_update());
    }

    #[test]
    fn test_user_scroll_interrupts_and_settles() {
        let mut page = scroller();
        page.animate_to(900.0, 0);
        page.update(150);
        page.scroll_by(-50.0);
        assert!(!page.is_animating());

        let update = page.update(160);
        assert!(update.settled);
        assert!((page.offset() - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_animate_to_current_offset_settles_at_once() {
        let mut page = scroller();
        page.animate_to(0.0, 0);
        assert!(!page.is_animating());
        assert_eq!(
            page.update(0),
            PageUpdate {
                moved: false,
                settled: true
            }
        );
    }

    #[test]
    fn test_offsets_are_clamped() {
        let mut page = scroller();
        page.scroll_by(5000.0);
        assert!((page.offset() - 1000.0).abs() < 0.001);
        assert!((page.ratio() - 1.0).abs() < 0.001);

        page.set_max_offset(400.0);
        assert!((page.offset() - 400.0).abs() < 0.001);

        page.jump_to(-20.0);
        assert_eq!(page.offset(), 0.0);
    }
}

//! Scroll-driven cursor updates and programmatic scroll bookkeeping

use super::scroll_map::{ScrollSync, ScrollTrack};
use super::timers::{Delayed, DelayedTransitions, Millis};
use super::tween::TweenFollowUp;
use super::{Engine, InputOutcome};
use crate::sink::{RenderSink, ScrollBehavior};

impl<S: RenderSink> Engine<S> {
    /// Current scroll track for the spacer and viewport
    pub fn track(&self) -> ScrollTrack {
        ScrollTrack::new(&self.state.viewport, self.state.spacer_height)
    }

    /// Page offset that shows `frame`
    pub fn frame_offset(&self, frame: usize) -> f64 {
        self.track().frame_to_scroll(frame, self.catalog.max_frame())
    }

    /// Page scroll event (continuous mode)
    pub fn on_scroll(&mut self, scroll_y: f64, now: Millis) -> InputOutcome {
        if !self.state.listeners.scroll {
            return InputOutcome::Ignored;
        }
        self.state.last_scroll_y = scroll_y;

        if !self.state.scroll_sync.is_tracking() {
            tracing::trace!(scroll_y, sync = ?self.state.scroll_sync, "Scroll suppressed");
            return InputOutcome::Absorbed;
        }

        if self.reverse_map(scroll_y, now) {
            InputOutcome::Advanced
        } else {
            InputOutcome::Absorbed
        }
    }

    /// The host finished a programmatic scroll
    pub fn on_scroll_settled(&mut self, now: Millis) {
        if let ScrollSync::Programmatic { scroll_settled, .. } = &mut self.state.scroll_sync {
            *scroll_settled = true;
            self.state.timers.scroll_settle = None;
            self.finish_programmatic(now);
        }
    }

    /// Derive the cursor from a page offset; true if the frame changed
    pub(super) fn reverse_map(&mut self, scroll_y: f64, now: Millis) -> bool {
        let max_frame = self.catalog.max_frame();
        let track = self.track();
        let frame = track.scroll_to_frame(scroll_y, max_frame);
        let previous = self.state.cursor.frame();
        if frame == previous {
            // pushing against the track end on the last frame
            if frame == max_frame && scroll_y >= track.end() {
                self.complete_timeline();
            }
            return false;
        }

        self.state.cursor.set(frame);
        self.render(now);

        if frame == max_frame && frame > previous {
            self.complete_timeline();
        } else if frame < max_frame {
            self.reopen_timeline();
        }
        true
    }

    /// Scroll and tween together toward `target`, muting scroll input meanwhile
    pub(super) fn navigate_continuous(&mut self, target: usize, now: Millis) {
        self.state.scroll_sync = ScrollSync::Programmatic {
            target,
            scroll_settled: false,
            tween_done: false,
        };
        let offset = self.frame_offset(target);
        tracing::debug!(target, offset, "Programmatic scroll");
        self.sink.scroll_to(offset, ScrollBehavior::Smooth);
        self.state.timers.scroll_settle =
            Some(Delayed::after(now, self.config.scroll_settle_timeout_ms, ()));
        self.start_tween(target, TweenFollowUp::SettleProgrammaticScroll, now);
    }

    /// Smooth return to frame 0 after a reset; no tween involved
    pub(super) fn return_to_track_start(&mut self, now: Millis) {
        self.state.scroll_sync = ScrollSync::Programmatic {
            target: 0,
            scroll_settled: false,
            tween_done: true,
        };
        let offset = self.frame_offset(0);
        self.sink.scroll_to(offset, ScrollBehavior::Smooth);
        self.state.timers.scroll_settle =
            Some(Delayed::after(now, self.config.scroll_settle_timeout_ms, ()));
    }

    pub(super) fn mark_tween_done(&mut self, now: Millis) {
        if let ScrollSync::Programmatic { tween_done, .. } = &mut self.state.scroll_sync {
            *tween_done = true;
            self.finish_programmatic(now);
        }
    }

    /// Leave the programmatic state once both halves are done
    fn finish_programmatic(&mut self, now: Millis) {
        let ScrollSync::Programmatic {
            target,
            scroll_settled: true,
            tween_done: true,
        } = self.state.scroll_sync
        else {
            return;
        };

        // correct drift from resizes during the scroll
        let offset = self.frame_offset(self.state.cursor.frame());
        self.sink.scroll_to(offset, ScrollBehavior::Instant);
        self.state.last_scroll_y = offset;
        // the page cannot scroll past the last frame, so landing there completes
        if self.state.cursor.frame() == self.catalog.max_frame() {
            self.complete_timeline();
        } else {
            self.reopen_timeline();
        }

        self.state.scroll_sync = if self.config.snap_cooldown_ms > 0 {
            ScrollSync::Cooldown {
                until: now.saturating_add(self.config.snap_cooldown_ms),
            }
        } else {
            ScrollSync::Tracking
        };
        tracing::debug!(target, offset, "Programmatic scroll settled");
    }

    /// Settle fallback and cooldown expiry
    pub(super) fn fire_scroll_timers(&mut self, now: Millis) {
        if DelayedTransitions::take_due(&mut self.state.timers.scroll_settle, now).is_some() {
            tracing::debug!("No scroll-settled signal; assuming the scroll landed");
            self.on_scroll_settled(now);
        }

        if let ScrollSync::Cooldown { until } = self.state.scroll_sync {
            if now >= until {
                self.state.scroll_sync = ScrollSync::Tracking;
                let scroll_y = self.state.last_scroll_y;
                self.reverse_map(scroll_y, now);
            }
        }
    }
}

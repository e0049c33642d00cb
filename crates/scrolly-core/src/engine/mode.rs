//! Mode controller: locked gestures vs. continuous document scroll

use super::scroll_map::{spacer_height, ScrollSync, ViewportMetrics};
use super::timers::Millis;
use super::Engine;
use crate::sink::{RenderSink, ScrollBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Wheel and touch gestures step the timeline; the page does not scroll
    #[default]
    Locked,
    /// The page scrolls and its offset drives the timeline
    Continuous,
}

/// Which input sources the engine currently listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputListeners {
    pub gesture: bool,
    pub scroll: bool,
}

impl InputListeners {
    pub const NONE: Self = Self {
        gesture: false,
        scroll: false,
    };

    pub fn for_mode(mode: InputMode) -> Self {
        match mode {
            InputMode::Locked => Self {
                gesture: true,
                scroll: false,
            },
            InputMode::Continuous => Self {
                gesture: false,
                scroll: true,
            },
        }
    }
}

impl<S: RenderSink> Engine<S> {
    /// Whether a viewport `width` px wide falls under the continuous breakpoint
    #[inline]
    pub fn below_breakpoint(&self, width: f64) -> bool {
        width < self.config.continuous_breakpoint_px
    }

    /// Resize plus breakpoint check in one call
    pub fn on_viewport(&mut self, metrics: ViewportMetrics, now: Millis) {
        self.on_resize(metrics, now);
        let continuous = self.below_breakpoint(metrics.width);
        self.set_continuous(continuous, now);
    }

    /// Record new viewport geometry; resizes the spacer in continuous mode
    pub fn on_resize(&mut self, metrics: ViewportMetrics, _now: Millis) {
        self.state.viewport = metrics;
        if self.state.mode != InputMode::Continuous {
            return;
        }

        self.resize_spacer();
        if self.state.scroll_sync.is_tracking() {
            // keep the current frame under the new geometry
            let offset = self.frame_offset(self.state.cursor.frame());
            if (offset - self.state.last_scroll_y).abs() >= 0.5 {
                self.sink.scroll_to(offset, ScrollBehavior::Instant);
                self.state.last_scroll_y = offset;
            }
        }
    }

    /// Switch modes on the external breakpoint signal; repeated calls only resize
    pub fn set_continuous(&mut self, continuous: bool, now: Millis) {
        let target = if continuous {
            InputMode::Continuous
        } else {
            InputMode::Locked
        };

        if target == self.state.mode {
            if target == InputMode::Continuous {
                self.resize_spacer();
            }
            return;
        }

        tracing::info!(from = ?self.state.mode, to = ?target, frame = self.state.cursor.frame(), "Switching input mode");

        // old listeners go first so no input is handled twice
        self.state.listeners = InputListeners::NONE;
        if self.state.tweener.cancel() {
            tracing::debug!("Tween cancelled by mode switch");
        }
        self.state.accumulator.reset();
        self.state.touch.end();
        self.state.timers.scroll_settle = None;
        self.state.scroll_sync = ScrollSync::Tracking;

        self.state.mode = target;
        self.state.listeners = InputListeners::for_mode(target);
        self.sink.set_input_mode(target);

        match target {
            InputMode::Continuous => {
                self.resize_spacer();
                let offset = self.frame_offset(self.state.cursor.frame());
                self.sink.scroll_to(offset, ScrollBehavior::Instant);
                self.state.last_scroll_y = offset;
                self.reverse_map(offset, now);
            }
            InputMode::Locked => {
                self.state.spacer_height = 0.0;
                self.sink.set_spacer_height(0.0);
                self.sink.scroll_to(0.0, ScrollBehavior::Instant);
                self.state.last_scroll_y = 0.0;
            }
        }
    }

    fn resize_spacer(&mut self) {
        let height = spacer_height(
            self.catalog.max_frame(),
            self.state.viewport.height,
            &self.config,
        );
        if (height - self.state.spacer_height).abs() > f64::EPSILON {
            tracing::debug!(height, "Resizing scroll spacer");
            self.state.spacer_height = height;
            self.sink.set_spacer_height(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_are_exclusive() {
        let locked = InputListeners::for_mode(InputMode::Locked);
        let continuous = InputListeners::for_mode(InputMode::Continuous);
        assert!(locked.gesture && !locked.scroll);
        assert!(continuous.scroll && !continuous.gesture);
        assert_ne!(locked, continuous);
    }
}

//! Timeline synchronization engine
//!
//! One integer cursor over the frame catalog, moved by three input paths
//! (gesture accumulation, tweening, scroll derivation) and projected onto a
//! [`RenderSink`]. All entry points are synchronous and take the host clock
//! so the engine stays deterministic under test.
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = Engine::new(&storyboard, EngineConfig::default(), sink, now)?;
//! engine.on_viewport(metrics, now);
//!
//! // input callbacks
//! engine.on_wheel(delta_y, now);
//! engine.on_scroll(scroll_y, now);
//! engine.request_segment_focus(2, now)?;
//!
//! // once per animation frame
//! engine.tick(now);
//! ```

mod accumulator;
mod caption;
mod continuous;
mod cursor;
mod mode;
mod scroll_map;
mod state;
mod timers;
mod tween;


pub use accumulator::{AdvanceDecision, Direction, GestureAccumulator, TouchTracker};
pub use caption::CaptionResolver;
pub use cursor::TimelineCursor;
pub use mode::{InputListeners, InputMode};
pub use scroll_map::{spacer_height, ScrollSync, ScrollTrack, ViewportMetrics};
pub use state::{EngineState, Projection};
pub use timers::{Delayed, DelayedTransitions, Millis};
pub use tween::{TweenFollowUp, TweenStart, TweenStep, Tweener};

use crate::catalog::{CatalogOptions, FrameCatalog};
use crate::config::EngineConfig;
use crate::sink::{RenderSink, ScrollBehavior};
use crate::storyboard::{CopySegment, SegmentId, Storyboard};
use crate::{Error, Result};

/// What an input callback did with the event
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// No listener for this input in the current mode
    Ignored,
    /// Taken, but the cursor did not move
    Absorbed,
    /// The cursor moved
    Advanced,
    /// A gesture crossed its threshold at an end of the timeline
    BoundaryReached,
}

impl InputOutcome {
    /// Whether the host should cancel the platform's default scrolling
    #[inline]
    pub fn prevents_default(self) -> bool {
        !matches!(self, InputOutcome::Ignored)
    }
}

pub struct Engine<S> {
    catalog: FrameCatalog,
    segments: Vec<CopySegment>,
    config: EngineConfig,
    state: EngineState,
    sink: S,
}

impl<S: RenderSink> Engine<S> {
    /// Build the catalog, validate the copy track and render frame 0
    pub fn new(storyboard: &Storyboard, config: EngineConfig, sink: S, now: Millis) -> Result<Self> {
        config.validate()?;
        let catalog = storyboard.validate(&CatalogOptions::from(&config))?;

        let mut engine = Self {
            state: EngineState::new(catalog.max_frame()),
            segments: storyboard.segments.clone(),
            catalog,
            config,
            sink,
        };

        engine.sink.set_input_mode(InputMode::Locked);
        engine.seed(now);

        tracing::info!(
            frames = engine.catalog.len(),
            segments = engine.segments.len(),
            "Timeline engine ready"
        );
        Ok(engine)
    }

    pub fn catalog(&self) -> &FrameCatalog {
        &self.catalog
    }

    pub fn segments(&self) -> &[CopySegment] {
        &self.segments
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view of the engine state
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    pub fn current_frame(&self) -> usize {
        self.state.cursor.frame()
    }

    #[inline]
    pub fn max_frame(&self) -> usize {
        self.catalog.max_frame()
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.state.mode
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state.cursor.is_complete()
    }

    /// Pending signed gesture units
    #[inline]
    pub fn scroll_accumulator(&self) -> i64 {
        self.state.accumulator.total()
    }

    #[inline]
    pub fn is_tweening(&self) -> bool {
        self.state.tweener.is_active()
    }

    #[inline]
    pub fn scroll_sync(&self) -> ScrollSync {
        self.state.scroll_sync
    }

    /// Segment the current frame resolved to
    pub fn active_segment(&self) -> Option<SegmentId> {
        self.state.captions.last()
    }

    /// True while a tween, delayed transition or cooldown wants `tick` calls
    pub fn needs_tick(&self) -> bool {
        self.state.tweener.is_active()
            || !self.state.timers.is_empty()
            || matches!(self.state.scroll_sync, ScrollSync::Cooldown { .. })
    }

    /// Wheel event; only the sign of `delta_y` matters
    pub fn on_wheel(&mut self, delta_y: f64, now: Millis) -> InputOutcome {
        if !self.state.listeners.gesture {
            return InputOutcome::Ignored;
        }
        match Direction::from_sign(delta_y) {
            Some(direction) => self.apply_gesture(direction, now),
            None => InputOutcome::Ignored,
        }
    }

    pub fn on_touch_start(&mut self, y: f64) {
        if self.state.listeners.gesture {
            self.state.touch.start(y);
        }
    }

    /// Touch drag; one gesture unit per dead-zone-sized movement
    pub fn on_touch_move(&mut self, y: f64, now: Millis) -> InputOutcome {
        if !self.state.listeners.gesture {
            return InputOutcome::Ignored;
        }
        match self.state.touch.track(y, self.config.touch_dead_zone_px) {
            Some(direction) => self.apply_gesture(direction, now),
            None => InputOutcome::Ignored,
        }
    }

    pub fn on_touch_end(&mut self) {
        self.state.touch.end();
    }

    /// Rail click: go to the segment's anchor frame
    pub fn request_segment_focus(&mut self, id: SegmentId, now: Millis) -> Result<()> {
        let target = self
            .segments
            .get(id)
            .map(CopySegment::anchor)
            .ok_or(Error::UnknownSegment(id))?;
        tracing::info!(segment = id, target, "Segment focus requested");
        self.navigate_to(target, now);
        Ok(())
    }

    /// Tween (locked) or scroll plus tween (continuous) to `frame`
    pub fn navigate_to(&mut self, frame: usize, now: Millis) {
        let max_frame = self.catalog.max_frame();
        if frame > max_frame {
            tracing::warn!(frame, max_frame, "Navigation target clamped");
        }
        let target = frame.min(max_frame);

        match self.state.mode {
            InputMode::Locked => self.start_tween(target, TweenFollowUp::Nothing, now),
            InputMode::Continuous => self.navigate_continuous(target, now),
        }
    }

    /// Back to frame 0 with the first caption showing
    pub fn request_reset(&mut self, now: Millis) {
        tracing::info!(frame = self.state.cursor.frame(), "Timeline reset");

        self.state.tweener.cancel();
        self.state.timers.clear();
        self.state.scroll_sync = ScrollSync::Tracking;
        self.reopen_timeline();
        self.state.accumulator.reset();
        self.state.touch.end();
        self.state.cursor.reset();

        self.seed(now);

        match self.state.mode {
            InputMode::Locked => self.sink.scroll_to(0.0, ScrollBehavior::Smooth),
            InputMode::Continuous => self.return_to_track_start(now),
        }
    }

    /// Animation-frame callback: due transitions, then at most one tween step
    pub fn tick(&mut self, now: Millis) {
        self.fire_caption_timers(now);
        self.fire_scroll_timers(now);

        match self.state.tweener.step(&mut self.state.cursor) {
            TweenStep::Idle => {}
            TweenStep::Moved => self.render(now),
            TweenStep::Arrived(follow_up) => {
                self.render(now);
                self.finish_tween(follow_up, now);
            }
        }
    }

    fn apply_gesture(&mut self, direction: Direction, now: Millis) -> InputOutcome {
        let decision = self.state.accumulator.accumulate(
            direction,
            self.state.cursor.frame(),
            self.catalog.holds(),
        );

        match decision {
            AdvanceDecision::Absorbed => InputOutcome::Absorbed,
            AdvanceDecision::Advance(step) => {
                if self.state.tweener.cancel() {
                    tracing::debug!("Tween cancelled by gesture");
                }
                self.state.cursor.step(step);
                self.render(now);
                InputOutcome::Advanced
            }
            AdvanceDecision::BoundaryReached(Direction::Forward) => {
                self.complete_timeline();
                InputOutcome::BoundaryReached
            }
            AdvanceDecision::BoundaryReached(Direction::Backward) => InputOutcome::BoundaryReached,
        }
    }

    fn start_tween(&mut self, target: usize, follow_up: TweenFollowUp, now: Millis) {
        match self.state.tweener.start(target, &self.state.cursor, follow_up) {
            TweenStart::Immediate(follow_up) => self.finish_tween(follow_up, now),
            TweenStart::Running => {
                tracing::debug!(from = self.state.cursor.frame(), target, "Tween started");
            }
        }
    }

    fn finish_tween(&mut self, follow_up: TweenFollowUp, now: Millis) {
        match follow_up {
            TweenFollowUp::Nothing => {}
            TweenFollowUp::SettleProgrammaticScroll => self.mark_tween_done(now),
        }
    }

    fn complete_timeline(&mut self) {
        if self.state.cursor.mark_complete() {
            self.state.accumulator.reset();
            tracing::info!(frame = self.state.cursor.frame(), "Timeline complete");
            self.sink.on_timeline_complete();
        }
    }

    fn reopen_timeline(&mut self) {
        if self.state.cursor.reopen() {
            tracing::debug!("Timeline reopened");
            self.sink.on_timeline_reopened();
        }
    }

    /// Project the current frame: image, then rail and caption
    fn render(&mut self, now: Millis) {
        let frame = self.state.cursor.frame();

        match self.catalog.frame(frame).image_ref.as_deref() {
            Some(image) => {
                if self.state.projection.image.as_deref() != Some(image) {
                    self.sink.set_frame_image(Some(image));
                    self.state.projection.image = Some(image.to_string());
                }
                self.set_frame_visible(true);
            }
            None => self.set_frame_visible(false),
        }

        self.update_copy(frame, now);
    }

    fn set_frame_visible(&mut self, visible: bool) {
        if self.state.projection.frame_visible != Some(visible) {
            self.sink.set_frame_visible(visible);
            self.state.projection.frame_visible = Some(visible);
        }
    }

    /// Put the caption block into its initial state and render the cursor
    fn seed(&mut self, now: Millis) {
        let projection = &mut self.state.projection;
        projection.caption_visible = None;
        projection.caption_collapsed = None;
        projection.panel = None;
        self.state.captions.forget();

        if !self.segments.is_empty() {
            self.show_caption(0);
        }
        self.set_caption_collapsed(false);
        self.set_caption_visible(true);
        self.set_panel_mode(Default::default());

        self.render(now);
    }
}

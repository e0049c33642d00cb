//! Mutable engine state, owned by the engine alone

use super::accumulator::{GestureAccumulator, TouchTracker};
use super::caption::CaptionResolver;
use super::cursor::TimelineCursor;
use super::mode::{InputListeners, InputMode};
use super::scroll_map::{ScrollSync, ViewportMetrics};
use super::timers::DelayedTransitions;
use super::tween::Tweener;
use crate::storyboard::{DisplayMode, SegmentId};

/// What the sink was last told; `None` means unknown and forces the next call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub image: Option<String>,
    pub frame_visible: Option<bool>,
    /// Segment whose copy currently sits in the caption block
    pub displayed_copy: Option<SegmentId>,
    pub caption_visible: Option<bool>,
    pub caption_collapsed: Option<bool>,
    pub panel: Option<DisplayMode>,
    pub rail_active: Option<SegmentId>,
}

#[derive(Debug, Clone)]
pub struct EngineState {
    pub cursor: TimelineCursor,
    pub accumulator: GestureAccumulator,
    pub touch: TouchTracker,
    pub mode: InputMode,
    pub listeners: InputListeners,
    pub tweener: Tweener,
    pub scroll_sync: ScrollSync,
    pub timers: DelayedTransitions,
    pub captions: CaptionResolver,
    pub projection: Projection,
    pub viewport: ViewportMetrics,
    pub spacer_height: f64,
    /// Last page offset seen (or written) in continuous mode
    pub last_scroll_y: f64,
}

impl EngineState {
    pub fn new(max_frame: usize) -> Self {
        Self {
            cursor: TimelineCursor::new(max_frame),
            accumulator: GestureAccumulator::new(),
            touch: TouchTracker::default(),
            mode: InputMode::Locked,
            listeners: InputListeners::for_mode(InputMode::Locked),
            tweener: Tweener::default(),
            scroll_sync: ScrollSync::Tracking,
            timers: DelayedTransitions::default(),
            captions: CaptionResolver::default(),
            projection: Projection::default(),
            viewport: ViewportMetrics::default(),
            spacer_height: 0.0,
            last_scroll_y: 0.0,
        }
    }
}

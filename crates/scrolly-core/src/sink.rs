//! Rendering sink: the presentation targets the engine drives
//!
//! The engine never reads presentation state back; every call is a
//! projection of engine state. Hosts implement this once per surface
//! (DOM bridge, terminal stage, test recorder).

use crate::engine::InputMode;
use crate::storyboard::{DisplayMode, SegmentId};

/// How a programmatic scroll should be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

pub trait RenderSink {
    /// Show a frame image. `None` leaves the current image in place.
    fn set_frame_image(&mut self, image_ref: Option<&str>);

    fn set_frame_visible(&mut self, visible: bool);

    fn set_caption(&mut self, label: &str, title: &str, description: &str);

    fn set_caption_visible(&mut self, visible: bool);

    fn set_caption_collapsed(&mut self, collapsed: bool);

    fn set_panel_mode(&mut self, mode: DisplayMode);

    fn set_progress_segment_active(&mut self, segment: SegmentId, active: bool);

    /// Fired once each time the timeline latches complete
    fn on_timeline_complete(&mut self);

    /// The completed state was cleared (reset or scroll-back)
    fn on_timeline_reopened(&mut self);

    /// Which input listener set is live
    fn set_input_mode(&mut self, mode: InputMode);

    /// Height of the reserved scroll spacer; zero collapses it
    fn set_spacer_height(&mut self, height: f64);

    /// Move the page scroll offset
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);
}

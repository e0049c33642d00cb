//! Terminal rendering sink
//!
//! The engine pushes projections into [`TerminalStage`]; widgets read the
//! resulting [`StageView`] when drawing.

use std::collections::BTreeSet;

use scrolly_core::{DisplayMode, InputMode, RenderSink, ScrollBehavior, SegmentId};

use crate::page::PageScroller;
use crate::timing::Clock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionText {
    pub label: String,
    pub title: String,
    pub description: String,
}

/// Everything the widgets need to draw the stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageView {
    pub image_ref: Option<String>,
    pub frame_visible: bool,
    pub caption: CaptionText,
    pub caption_visible: bool,
    pub caption_collapsed: bool,
    pub panel: DisplayMode,
    pub active_segments: BTreeSet<SegmentId>,
    pub complete: bool,
    pub mode: InputMode,
    pub spacer_height: f64,
}

pub struct TerminalStage {
    pub view: StageView,
    pub page: PageScroller,
    clock: Clock,
    viewport_height: f64,
}

impl TerminalStage {
    pub fn new(clock: Clock, smooth_scroll_ms: u64) -> Self {
        Self {
            view: StageView::default(),
            page: PageScroller::new(smooth_scroll_ms),
            clock,
            viewport_height: 0.0,
        }
    }

    /// Must be called before the engine sees the matching resize
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
        self.sync_page_extent();
    }

    fn sync_page_extent(&mut self) {
        self.page
            .set_max_offset(self.view.spacer_height - self.viewport_height);
    }
}

impl RenderSink for TerminalStage {
    fn set_frame_image(&mut self, image_ref: Option<&str>) {
        if let Some(image_ref) = image_ref {
            self.view.image_ref = Some(image_ref.to_string());
        }
    }

    fn set_frame_visible(&mut self, visible: bool) {
        self.view.frame_visible = visible;
    }

    fn set_caption(&mut self, label: &str, title: &str, description: &str) {
        self.view.caption = CaptionText {
            label: label.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        };
    }

    fn set_caption_visible(&mut self, visible: bool) {
        self.view.caption_visible = visible;
    }

    fn set_caption_collapsed(&mut self, collapsed: bool) {
        self.view.caption_collapsed = collapsed;
    }

    fn set_panel_mode(&mut self, mode: DisplayMode) {
        self.view.panel = mode;
    }

    fn set_progress_segment_active(&mut self, segment: SegmentId, active: bool) {
        if active {
            self.view.active_segments.insert(segment);
        } else {
            self.view.active_segments.remove(&segment);
        }
    }

    fn on_timeline_complete(&mut self) {
        self.view.complete = true;
    }

    fn on_timeline_reopened(&mut self) {
        self.view.complete = false;
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        self.view.mode = mode;
    }

    fn set_spacer_height(&mut self, height: f64) {
        self.view.spacer_height = height;
        self.sync_page_extent();
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        tracing::trace!(offset, ?behavior, "Page scroll");
        match behavior {
            ScrollBehavior::Instant => self.page.jump_to(offset),
            ScrollBehavior::Smooth => self.page.animate_to(offset, self.clock.now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_updates_view() {
        let mut stage = TerminalStage::new(Clock::start(), 0);
        stage.set_frame_image(Some("a_0001.png"));
        stage.set_frame_image(None);
        assert_eq!(stage.view.image_ref.as_deref(), Some("a_0001.png"));

        stage.set_caption("L", "T", "D");
        stage.set_caption_visible(true);
        assert_eq!(stage.view.caption.title, "T");
        assert!(stage.view.caption_visible);

        stage.set_progress_segment_active(2, true);
        stage.set_progress_segment_active(3, true);
        stage.set_progress_segment_active(2, false);
        assert_eq!(stage.view.active_segments.iter().copied().collect::<Vec<_>>(), vec![3]);

        stage.on_timeline_complete();
        assert!(stage.view.complete);
        stage.on_timeline_reopened();
        assert!(!stage.view.complete);
    }

    #[test]
    fn test_spacer_sets_page_extent() {
        let mut stage = TerminalStage::new(Clock::start(), 0);
        stage.set_viewport_height(400.0);
        stage.set_spacer_height(1600.0);
        assert!((stage.page.max_offset() - 1200.0).abs() < 0.001);

        stage.scroll_to(900.0, ScrollBehavior::Instant);
        assert!((stage.page.offset() - 900.0).abs() < 0.001);

        stage.set_spacer_height(0.0);
        assert_eq!(stage.page.max_offset(), 0.0);
        assert_eq!(stage.page.offset(), 0.0);
    }
}

//! Caption and segment resolution

use super::timers::{Delayed, DelayedTransitions, Millis};
use super::Engine;
use crate::sink::RenderSink;
use crate::storyboard::{CopySegment, DisplayMode, SegmentId};

/// First segment in declaration order containing `frame`
pub(super) fn resolve(segments: &[CopySegment], frame: usize) -> Option<SegmentId> {
    segments.iter().position(|s| s.contains(frame))
}

/// Remembers the last resolution so scrubbing inside one segment stays quiet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionResolver {
    /// `None` until the first resolution after construction or reset
    last: Option<Option<SegmentId>>,
}

impl CaptionResolver {
    pub fn forget(&mut self) {
        self.last = None;
    }

    pub fn last(&self) -> Option<SegmentId> {
        self.last.flatten()
    }

    /// Record `current`; true when its copy differs from the previous resolution
    pub fn update(&mut self, segments: &[CopySegment], current: Option<SegmentId>) -> bool {
        match self.last.replace(current) {
            None => true,
            Some(previous) => !same_copy(segments, previous, current),
        }
    }
}

/// Segments compare by copy and display mode, never by position
fn same_copy(segments: &[CopySegment], a: Option<SegmentId>, b: Option<SegmentId>) -> bool {
    match (a.and_then(|id| segments.get(id)), b.and_then(|id| segments.get(id))) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_copy(b) && a.display_mode == b.display_mode,
        _ => false,
    }
}

impl<S: RenderSink> Engine<S> {
    /// Bring rail, panel and caption in line with `frame`
    pub(super) fn update_copy(&mut self, frame: usize, now: Millis) {
        let resolved = resolve(&self.segments, frame);
        self.sync_rail(resolved);

        if !self.state.captions.update(&self.segments, resolved) {
            return;
        }

        let mode = resolved
            .map(|id| self.segments[id].display_mode)
            .unwrap_or_default();
        tracing::debug!(frame, segment = ?resolved, ?mode, "Segment changed");
        self.set_panel_mode(mode);

        match resolved.filter(|_| mode == DisplayMode::Normal) {
            None => {
                self.state.timers.caption_reveal = None;
                self.set_caption_visible(false);
                if self.state.projection.caption_collapsed != Some(true) {
                    self.state.timers.caption_collapse =
                        Some(Delayed::after(now, self.config.caption_collapse_delay_ms, ()));
                }
            }
            Some(id) => {
                self.state.timers.caption_collapse = None;
                self.set_caption_collapsed(false);

                let already_shown = self
                    .state
                    .projection
                    .displayed_copy
                    .and_then(|shown| self.segments.get(shown))
                    .is_some_and(|shown| shown.same_copy(&self.segments[id]));

                if already_shown {
                    self.state.timers.caption_reveal = None;
                    self.set_caption_visible(true);
                } else {
                    self.set_caption_visible(false);
                    self.state.timers.caption_reveal =
                        Some(Delayed::after(now, self.config.caption_reveal_delay_ms, id));
                }
            }
        }
    }

    /// Fire caption transitions that have come due
    pub(super) fn fire_caption_timers(&mut self, now: Millis) {
        if let Some(id) = DelayedTransitions::take_due(&mut self.state.timers.caption_reveal, now) {
            self.show_caption(id);
        }
        if DelayedTransitions::take_due(&mut self.state.timers.caption_collapse, now).is_some() {
            self.set_caption_collapsed(true);
        }
    }

    /// Write a segment's copy and make it visible
    pub(super) fn show_caption(&mut self, id: SegmentId) {
        let Some(segment) = self.segments.get(id) else {
            return;
        };
        self.sink
            .set_caption(&segment.label, &segment.title, &segment.description);
        self.state.projection.displayed_copy = Some(id);
        self.set_caption_visible(true);
    }

    fn sync_rail(&mut self, resolved: Option<SegmentId>) {
        let previous = self.state.projection.rail_active;
        if previous == resolved {
            return;
        }
        if let Some(id) = previous {
            self.sink.set_progress_segment_active(id, false);
        }
        if let Some(id) = resolved {
            self.sink.set_progress_segment_active(id, true);
        }
        self.state.projection.rail_active = resolved;
    }

    pub(super) fn set_panel_mode(&mut self, mode: DisplayMode) {
        if self.state.projection.panel != Some(mode) {
            self.sink.set_panel_mode(mode);
            self.state.projection.panel = Some(mode);
        }
    }

    pub(super) fn set_caption_visible(&mut self, visible: bool) {
        if self.state.projection.caption_visible != Some(visible) {
            self.sink.set_caption_visible(visible);
            self.state.projection.caption_visible = Some(visible);
        }
    }

    pub(super) fn set_caption_collapsed(&mut self, collapsed: bool) {
        if self.state.projection.caption_collapsed != Some(collapsed) {
            self.sink.set_caption_collapsed(collapsed);
            self.state.projection.caption_collapsed = Some(collapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Vec<CopySegment> {
        vec![
            CopySegment::new(0, 2, "A", "Alpha", "first"),
            CopySegment::new(3, 4, "A", "Alpha", "first"),
            CopySegment::new(6, 8, "B", "Beta", "second"),
            CopySegment::new(7, 9, "C", "Gamma", "overlap"),
        ]
    }

    #[test]
    fn test_resolve_first_match_and_gaps() {
        let segments = track();
        assert_eq!(resolve(&segments, 0), Some(0));
        assert_eq!(resolve(&segments, 4), Some(1));
        assert_eq!(resolve(&segments, 5), None);
        assert_eq!(resolve(&segments, 7), Some(2));
        assert_eq!(resolve(&segments, 9), Some(3));
        assert_eq!(resolve(&segments, 10), None);
    }

    #[test]
    fn test_update_reports_copy_changes_only() {
        let segments = track();
        let mut resolver = CaptionResolver::default();
        assert!(resolver.update(&segments, Some(0)));
        assert!(!resolver.update(&segments, Some(0)));
        // same copy, different range
        assert!(!resolver.update(&segments, Some(1)));
        assert!(resolver.update(&segments, None));
        assert!(!resolver.update(&segments, None));
        assert!(resolver.update(&segments, Some(2)));
        assert_eq!(resolver.last(), Some(2));

        resolver.forget();
        assert!(resolver.update(&segments, Some(2)));
    }

    #[test]
    fn test_mode_change_counts_as_change() {
        let segments = vec![
            CopySegment::new(0, 1, "X", "Y", "Z"),
            CopySegment::new(2, 3, "X", "Y", "Z").with_mode(DisplayMode::Contact),
        ];
        let mut resolver = CaptionResolver::default();
        resolver.update(&segments, Some(0));
        assert!(resolver.update(&segments, Some(1)));
    }
}

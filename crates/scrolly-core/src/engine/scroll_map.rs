//! Scroll-position mapping for continuous mode
//!
//! The reserved spacer defines a track `[start, start + height]` of page
//! offsets. Frames map linearly onto that track.

use super::timers::Millis;
use crate::config::EngineConfig;

/// Geometry reported by the host on resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
    /// Top offset of the reserved spacer; `None` when the page has none
    pub spacer_top: Option<f64>,
    /// Full document height, used as the track when there is no spacer
    pub document_height: f64,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            spacer_top: Some(0.0),
            document_height: 800.0,
        }
    }
}

/// Height the spacer gets in continuous mode
pub fn spacer_height(max_frame: usize, viewport_height: f64, config: &EngineConfig) -> f64 {
    let per_frame = (max_frame + 1) as f64 * viewport_height * config.frame_track_ratio;
    per_frame.max(viewport_height * config.min_track_viewports)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrack {
    pub start: f64,
    pub height: f64,
}

impl ScrollTrack {
    pub fn new(metrics: &ViewportMetrics, spacer_height: f64) -> Self {
        match metrics.spacer_top {
            Some(top) => Self {
                start: top,
                height: (spacer_height - metrics.height).max(1.0),
            },
            None => Self {
                start: 0.0,
                height: (metrics.document_height - metrics.height).max(1.0),
            },
        }
    }

    /// Offset of the last frame
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.height
    }

    /// Page offset for `frame`
    pub fn frame_to_scroll(&self, frame: usize, max_frame: usize) -> f64 {
        if max_frame == 0 {
            return self.start;
        }
        let ratio = frame.min(max_frame) as f64 / max_frame as f64;
        self.start + ratio * self.height
    }

    /// Frame shown at page offset `scroll_y`
    pub fn scroll_to_frame(&self, scroll_y: f64, max_frame: usize) -> usize {
        let progress = (scroll_y - self.start).clamp(0.0, self.height) / self.height;
        let frame = (progress * max_frame as f64).round();
        (frame as usize).min(max_frame)
    }
}

/// Whether scroll events drive the cursor right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollSync {
    /// Scroll offset drives the cursor
    #[default]
    Tracking,
    /// A navigation scroll and its tween are running; scroll input is ignored
    Programmatic {
        target: usize,
        scroll_settled: bool,
        tween_done: bool,
    },
    /// Brief pause after a navigation lands
    Cooldown { until: Millis },
}

impl ScrollSync {
    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self, ScrollSync::Tracking)
    }

    #[inline]
    pub fn is_programmatic(&self) -> bool {
        matches!(self, ScrollSync::Programmatic { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(height: f64) -> ViewportMetrics {
        ViewportMetrics {
            width: 400.0,
            height,
            spacer_top: Some(100.0),
            document_height: 0.0,
        }
    }

    #[test]
    fn test_spacer_height_floor() {
        let config = EngineConfig::default();
        // 5 frames * 0.12 = 0.6 viewports, below the 2 viewport floor
        assert!((spacer_height(4, 800.0, &config) - 1600.0).abs() < 1e-9);
        // 68 frames * 0.12 = 8.16 viewports
        assert!((spacer_height(67, 100.0, &config) - 816.0).abs() < 1e-9);
    }

    #[test]
    fn test_track_from_spacer() {
        let track = ScrollTrack::new(&metrics(800.0), 1600.0);
        assert_eq!(track.start, 100.0);
        assert_eq!(track.height, 800.0);
    }

    #[test]
    fn test_track_without_spacer_uses_document() {
        let m = ViewportMetrics {
            spacer_top: None,
            document_height: 3000.0,
            ..metrics(1000.0)
        };
        let track = ScrollTrack::new(&m, 0.0);
        assert_eq!(track.start, 0.0);
        assert_eq!(track.height, 2000.0);
    }

    #[test]
    fn test_degenerate_track_height() {
        let track = ScrollTrack::new(&metrics(800.0), 200.0);
        assert_eq!(track.height, 1.0);
    }

    #[test]
    fn test_forward_and_reverse() {
        let track = ScrollTrack { start: 100.0, height: 800.0 };
        assert_eq!(track.frame_to_scroll(0, 4), 100.0);
        assert_eq!(track.frame_to_scroll(2, 4), 500.0);
        assert_eq!(track.frame_to_scroll(4, 4), 900.0);
        assert_eq!(track.frame_to_scroll(9, 4), 900.0);

        assert_eq!(track.scroll_to_frame(0.0, 4), 0);
        assert_eq!(track.scroll_to_frame(299.0, 4), 1);
        assert_eq!(track.scroll_to_frame(399.0, 4), 1);
        assert_eq!(track.scroll_to_frame(401.0, 4), 2);
        assert_eq!(track.scroll_to_frame(5000.0, 4), 4);
    }

    #[test]
    fn test_frame_round_trip() {
        let track = ScrollTrack { start: 37.0, height: 1234.0 };
        for frame in 0..=67 {
            let y = track.frame_to_scroll(frame, 67);
            assert_eq!(track.scroll_to_frame(y, 67), frame);
        }
    }

    #[test]
    fn test_pixel_round_trip_within_one_pixel() {
        // one frame per pixel or finer: quantisation stays under a pixel
        let track = ScrollTrack { start: 50.0, height: 120.0 };
        let max_frame = 240;
        let mut y = track.start;
        while y <= track.start + track.height {
            let back = track.frame_to_scroll(track.scroll_to_frame(y, max_frame), max_frame);
            assert!((back - y).abs() <= 1.0, "y={y} back={back}");
            y += 0.7;
        }
    }

    #[test]
    fn test_pixel_round_trip_within_half_step() {
        let track = ScrollTrack { start: 0.0, height: 900.0 };
        let max_frame = 9;
        let half_step = track.height / max_frame as f64 / 2.0;
        for y in 0..=900 {
            let y = y as f64;
            let back = track.frame_to_scroll(track.scroll_to_frame(y, max_frame), max_frame);
            assert!((back - y).abs() <= half_step + 1e-9);
        }
    }

    #[test]
    fn test_single_frame_track() {
        let track = ScrollTrack { start: 10.0, height: 500.0 };
        assert_eq!(track.frame_to_scroll(0, 0), 10.0);
        assert_eq!(track.scroll_to_frame(400.0, 0), 0);
    }
}

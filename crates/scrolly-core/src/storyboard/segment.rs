//! Copy segments: caption text bound to frame ranges

use serde::{Deserialize, Serialize};

/// Position of a segment in declaration order
pub type SegmentId = usize;

/// Which content panel accompanies a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Normal,
    Compare,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySegment {
    #[serde(rename = "start")]
    pub start_frame: usize,
    #[serde(rename = "end")]
    pub end_frame: usize,
    pub label: String,
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    /// Rail navigation target; the rounded midpoint is used when absent
    #[serde(default, rename = "anchor", skip_serializing_if = "Option::is_none")]
    pub anchor_frame: Option<usize>,
    #[serde(default, rename = "mode")]
    pub display_mode: DisplayMode,
}

impl CopySegment {
    pub fn new(
        start_frame: usize,
        end_frame: usize,
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            start_frame,
            end_frame,
            label: label.into(),
            title: title.into(),
            description: description.into(),
            anchor_frame: None,
            display_mode: DisplayMode::Normal,
        }
    }

    pub fn with_anchor(mut self, anchor: usize) -> Self {
        self.anchor_frame = Some(anchor);
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    #[inline]
    pub fn contains(&self, frame: usize) -> bool {
        frame >= self.start_frame && frame <= self.end_frame
    }

    /// Frame the rail jumps to
    pub fn anchor(&self) -> usize {
        self.anchor_frame
            .unwrap_or((self.start_frame + self.end_frame + 1) / 2)
    }

    /// Two segments carry the same copy when label, title and description match
    pub fn same_copy(&self, other: &CopySegment) -> bool {
        self.label == other.label && self.title == other.title && self.description == other.description
    }
}

//! Storyboard files: frame sequences plus the copy track

mod panels;
mod segment;
mod sequence;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use panels::Panels;
pub use segment::{CopySegment, DisplayMode, SegmentId};
pub use sequence::{SequenceDescriptor, SequenceShape};

use crate::catalog::{CatalogOptions, FrameCatalog};
use crate::{Error, Result};

const SAMPLE_STORYBOARD: &str = include_str!("../../assets/storyboard.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    #[serde(default)]
    pub sequences: Vec<SequenceDescriptor>,
    #[serde(default)]
    pub segments: Vec<CopySegment>,
    #[serde(default)]
    pub panels: Panels,
}

impl Storyboard {
    pub fn new(sequences: Vec<SequenceDescriptor>, segments: Vec<CopySegment>) -> Self {
        Self {
            sequences,
            segments,
            panels: Panels::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a storyboard file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Built-in sample storyboard
    pub fn sample() -> Result<Self> {
        Self::from_toml_str(SAMPLE_STORYBOARD)
    }

    /// Source text of the built-in sample
    pub fn sample_source() -> &'static str {
        SAMPLE_STORYBOARD
    }

    /// Build the catalog and check the copy track against it
    pub fn validate(&self, options: &CatalogOptions) -> Result<FrameCatalog> {
        let catalog = FrameCatalog::build(&self.sequences, options)?;
        self.validate_segments(catalog.max_frame())?;
        Ok(catalog)
    }

    /// Check the copy track against a catalog whose last index is `max_frame`
    pub fn validate_segments(&self, max_frame: usize) -> Result<()> {
        for (index, segment) in self.segments.iter().enumerate() {
            let invalid = |reason: String| Error::InvalidSegment { index, reason };

            if segment.start_frame > segment.end_frame {
                return Err(invalid(format!(
                    "start {} is after end {}",
                    segment.start_frame, segment.end_frame
                )));
            }
            if segment.end_frame > max_frame {
                return Err(invalid(format!(
                    "end {} is beyond the last frame {}",
                    segment.end_frame, max_frame
                )));
            }
            if let Some(anchor) = segment.anchor_frame {
                if !segment.contains(anchor) {
                    return Err(invalid(format!(
                        "anchor {} is outside {}..={}",
                        anchor, segment.start_frame, segment.end_frame
                    )));
                }
            }
        }
        Ok(())
    }
}

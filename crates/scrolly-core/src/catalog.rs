//! Flattened frame catalog built from sequence descriptors

use crate::config::EngineConfig;
use crate::storyboard::SequenceDescriptor;
use crate::{Error, Result};

/// How frame numbers become image references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub default_hold: u32,
    pub pad_width: usize,
    pub extension: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for CatalogOptions {
    fn from(config: &EngineConfig) -> Self {
        Self {
            default_hold: config.default_hold,
            pad_width: config.image_pad_width,
            extension: config.image_extension.clone(),
        }
    }
}

/// One catalog entry; its index is the frame index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub segment_key: String,
    pub image_ref: Option<String>,
}

impl Frame {
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.image_ref.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCatalog {
    frames: Vec<Frame>,
    holds: Vec<u32>,
}

impl FrameCatalog {
    /// Expand descriptors in order into frames and per-frame holds
    pub fn build(sequences: &[SequenceDescriptor], options: &CatalogOptions) -> Result<Self> {
        let mut frames = Vec::new();
        let mut holds = Vec::new();

        for seq in sequences {
            let numbers = seq.frame_numbers();
            if numbers.is_empty() {
                return Err(Error::EmptySequence(seq.key.clone()));
            }

            let hold = seq.hold.unwrap_or(options.default_hold).max(1);
            let base = seq.base();

            for number in numbers {
                let image_ref = match (number, base) {
                    (0, _) | (_, None) => None,
                    (n, Some(base)) => Some(format!(
                        "{base}{n:0width$}.{ext}",
                        width = options.pad_width,
                        ext = options.extension
                    )),
                };
                frames.push(Frame {
                    segment_key: seq.key.clone(),
                    image_ref,
                });
                holds.push(hold);
            }
        }

        if frames.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        tracing::debug!(frames = frames.len(), sequences = sequences.len(), "Built frame catalog");

        Ok(Self { frames, holds })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a built catalog
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_frame(&self) -> usize {
        self.frames.len() - 1
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn holds(&self) -> &[u32] {
        &self.holds
    }

    /// Frame at `index`, clamped into the catalog
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index.min(self.max_frame())]
    }

    /// Hold at `index`, clamped into the catalog
    pub fn hold(&self, index: usize) -> u32 {
        self.holds[index.min(self.max_frame())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_in_order() {
        let catalog = FrameCatalog::build(
            &[
                SequenceDescriptor::numbered("a", "a_", 3).with_hold(2),
                SequenceDescriptor::numbered("b", "b_", 2).with_hold(1),
            ],
            &CatalogOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.max_frame(), 4);
        assert_eq!(catalog.holds(), &[2, 2, 2, 1, 1]);
        assert_eq!(catalog.frame(0).image_ref.as_deref(), Some("a_0001.png"));
        assert_eq!(catalog.frame(3).image_ref.as_deref(), Some("b_0001.png"));
        assert_eq!(catalog.frame(3).segment_key, "b");
    }

    #[test]
    fn test_default_hold_and_blank_entries() {
        let catalog = FrameCatalog::build(
            &[
                SequenceDescriptor::blank("pause", 2),
                SequenceDescriptor::list("hold", "x_", vec![7, 0, 7]),
            ],
            &CatalogOptions::default(),
        )
        .unwrap();

        assert_eq!(catalog.holds(), &[3, 3, 3, 3, 3]);
        assert!(catalog.frame(0).is_blank());
        assert!(catalog.frame(1).is_blank());
        assert_eq!(catalog.frame(2).image_ref.as_deref(), Some("x_0007.png"));
        assert!(catalog.frame(3).is_blank());
        assert_eq!(catalog.frame(4).image_ref.as_deref(), Some("x_0007.png"));
    }

    #[test]
    fn test_lengths_match() {
        let catalog = FrameCatalog::build(
            &[
                SequenceDescriptor::numbered("ele", "ele_", 7).with_ping_pong(),
                SequenceDescriptor::blank("b", 3),
            ],
            &CatalogOptions::default(),
        )
        .unwrap();
        assert_eq!(catalog.len(), 13 + 3);
        assert_eq!(catalog.holds().len(), catalog.len());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            FrameCatalog::build(&[], &CatalogOptions::default()),
            Err(Error::EmptyCatalog)
        ));
        assert!(matches!(
            FrameCatalog::build(
                &[SequenceDescriptor::numbered("none", "n_", 0)],
                &CatalogOptions::default()
            ),
            Err(Error::EmptySequence(_))
        ));
    }

    #[test]
    fn test_clamped_lookup() {
        let catalog = FrameCatalog::build(
            &[SequenceDescriptor::numbered("a", "a_", 2).with_hold(4)],
            &CatalogOptions::default(),
        )
        .unwrap();
        assert_eq!(catalog.hold(99), 4);
        assert_eq!(catalog.frame(99).image_ref.as_deref(), Some("a_0002.png"));
    }

    #[test]
    fn test_sample_catalog() {
        let storyboard = crate::Storyboard::sample().unwrap();
        let catalog =
            FrameCatalog::build(&storyboard.sequences, &CatalogOptions::default()).unwrap();
        assert_eq!(catalog.max_frame(), 67);
        assert!(storyboard.validate_segments(catalog.max_frame()).is_ok());
    }
}

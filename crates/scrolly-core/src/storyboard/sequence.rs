//! Declarative frame sequences

use serde::{Deserialize, Serialize};

use crate::Error;

/// One entry of the `[[sequences]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSequence", into = "RawSequence")]
pub struct SequenceDescriptor {
    pub key: String,
    /// Gesture units per frame; the engine default applies when absent
    pub hold: Option<u32>,
    pub shape: SequenceShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceShape {
    /// Frames `1..=frames`, optionally mirrored back down to 1
    Numbered {
        base: String,
        frames: u32,
        ping_pong: bool,
    },
    /// Explicit frame numbers; 0 marks a blank frame
    List { base: Option<String>, frame_list: Vec<u32> },
    /// Placeholders without an image
    Blank { frames: u32 },
}

impl SequenceDescriptor {
    pub fn numbered(key: impl Into<String>, base: impl Into<String>, frames: u32) -> Self {
        Self {
            key: key.into(),
            hold: None,
            shape: SequenceShape::Numbered {
                base: base.into(),
                frames,
                ping_pong: false,
            },
        }
    }

    pub fn blank(key: impl Into<String>, frames: u32) -> Self {
        Self {
            key: key.into(),
            hold: None,
            shape: SequenceShape::Blank { frames },
        }
    }

    pub fn list(key: impl Into<String>, base: impl Into<String>, frame_list: Vec<u32>) -> Self {
        Self {
            key: key.into(),
            hold: None,
            shape: SequenceShape::List {
                base: Some(base.into()),
                frame_list,
            },
        }
    }

    pub fn with_hold(mut self, hold: u32) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn with_ping_pong(mut self) -> Self {
        if let SequenceShape::Numbered { ping_pong, .. } = &mut self.shape {
            *ping_pong = true;
        }
        self
    }

    /// Base path used to build image references, if any
    pub fn base(&self) -> Option<&str> {
        match &self.shape {
            SequenceShape::Numbered { base, .. } => Some(base),
            SequenceShape::List { base, .. } => base.as_deref(),
            SequenceShape::Blank { .. } => None,
        }
    }

    /// Frame numbers in playback order; 0 is a blank frame
    pub fn frame_numbers(&self) -> Vec<u32> {
        match &self.shape {
            SequenceShape::Numbered {
                frames, ping_pong, ..
            } => {
                let forward = 1..=*frames;
                if *ping_pong {
                    forward.chain((1..*frames).rev()).collect()
                } else {
                    forward.collect()
                }
            }
            SequenceShape::List { frame_list, .. } => frame_list.clone(),
            SequenceShape::Blank { frames } => vec![0; *frames as usize],
        }
    }
}

/// Flat table form as written in storyboard files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSequence {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frames: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frame_list: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "is_false")]
    ping_pong: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    blank: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hold: Option<u32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<RawSequence> for SequenceDescriptor {
    type Error = Error;

    fn try_from(raw: RawSequence) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| Error::InvalidSequence {
            key: raw.key.clone(),
            reason: reason.to_string(),
        };

        if raw.hold == Some(0) {
            return Err(invalid("hold must be at least 1"));
        }

        let shape = match (raw.blank, &raw.frame_list) {
            (true, Some(_)) => return Err(invalid("a blank sequence cannot have a frame_list")),
            (true, None) => SequenceShape::Blank {
                // a bare `blank = true` is a single pause frame
                frames: raw.frames.unwrap_or(1),
            },
            (false, Some(list)) => {
                if raw.base.is_none() && list.iter().any(|&n| n != 0) {
                    return Err(invalid("frame_list needs a base path"));
                }
                SequenceShape::List {
                    base: raw.base.clone(),
                    frame_list: list.clone(),
                }
            }
            (false, None) => {
                let base = raw.base.clone().ok_or_else(|| invalid("missing base path"))?;
                let frames = raw.frames.ok_or_else(|| invalid("missing frame count"))?;
                SequenceShape::Numbered {
                    base,
                    frames,
                    ping_pong: raw.ping_pong,
                }
            }
        };

        if raw.ping_pong && !matches!(shape, SequenceShape::Numbered { .. }) {
            return Err(invalid("ping_pong only applies to numbered sequences"));
        }

        Ok(Self {
            key: raw.key,
            hold: raw.hold,
            shape,
        })
    }
}

impl From<SequenceDescriptor> for RawSequence {
    fn from(seq: SequenceDescriptor) -> Self {
        let mut raw = RawSequence {
            key: seq.key,
            hold: seq.hold,
            ..Default::default()
        };
        match seq.shape {
            SequenceShape::Numbered {
                base,
                frames,
                ping_pong,
            } => {
                raw.base = Some(base);
                raw.frames = Some(frames);
                raw.ping_pong = ping_pong;
            }
            SequenceShape::List { base, frame_list } => {
                raw.base = base;
                raw.frame_list = Some(frame_list);
            }
            SequenceShape::Blank { frames } => {
                raw.blank = true;
                raw.frames = Some(frames);
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_pong_mirrors_without_endpoints() {
        let seq = SequenceDescriptor::numbered("ele", "ele_", 3).with_ping_pong();
        assert_eq!(seq.frame_numbers(), vec![1, 2, 3, 2, 1]);

        for frames in 1..12 {
            let seq = SequenceDescriptor::numbered("s", "s_", frames).with_ping_pong();
            let numbers = seq.frame_numbers();
            assert_eq!(numbers.len() as u32, 2 * frames - 1);
            let reversed: Vec<u32> = numbers.iter().rev().copied().collect();
            assert_eq!(numbers, reversed);
        }
    }

    #[test]
    fn test_blank_frames_are_zero() {
        assert_eq!(SequenceDescriptor::blank("bridge", 3).frame_numbers(), vec![0, 0, 0]);
    }

    #[test]
    fn test_parse_shapes() {
        #[derive(Deserialize)]
        struct Doc {
            sequences: Vec<SequenceDescriptor>,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[sequences]]
            key = "intro"
            base = "img/intro_"
            frames = 4
            hold = 2

            [[sequences]]
            key = "hold"
            base = "img/intro_"
            frame_list = [1, 1]

            [[sequences]]
            key = "pause"
            blank = true
            frames = 2
            "#,
        )
        .unwrap();

        assert_eq!(doc.sequences.len(), 3);
        assert_eq!(doc.sequences[0].hold, Some(2));
        assert!(matches!(
            doc.sequences[1].shape,
            SequenceShape::List { ref frame_list, .. } if frame_list == &vec![1, 1]
        ));
        assert_eq!(doc.sequences[2].shape, SequenceShape::Blank { frames: 2 });
    }

    #[test]
    fn test_rejects_contradictory_tables() {
        let raw = RawSequence {
            key: "bad".into(),
            blank: true,
            frame_list: Some(vec![1]),
            ..Default::default()
        };
        assert!(SequenceDescriptor::try_from(raw).is_err());

        let raw = RawSequence {
            key: "nobase".into(),
            frames: Some(3),
            ..Default::default()
        };
        assert!(SequenceDescriptor::try_from(raw).is_err());

        let raw = RawSequence {
            key: "zero".into(),
            base: Some("x_".into()),
            frames: Some(3),
            hold: Some(0),
            ..Default::default()
        };
        assert!(SequenceDescriptor::try_from(raw).is_err());
    }
}

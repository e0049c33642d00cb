pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod sink;
pub mod storyboard;

pub use catalog::{CatalogOptions, Frame, FrameCatalog};
pub use config::{AppConfig, EngineConfig};
pub use engine::{
    AdvanceDecision, Direction, Engine, InputMode, InputOutcome, Millis, ScrollSync,
    ViewportMetrics,
};
pub use error::{Error, Result};
pub use sink::{RenderSink, ScrollBehavior};
pub use storyboard::{
    CopySegment, DisplayMode, Panels, SegmentId, SequenceDescriptor, SequenceShape, Storyboard,
};

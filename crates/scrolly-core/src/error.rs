use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storyboard produces no frames")]
    EmptyCatalog,

    #[error("Sequence '{0}' produces no frames")]
    EmptySequence(String),

    #[error("Invalid sequence '{key}': {reason}")]
    InvalidSequence { key: String, reason: String },

    #[error("Invalid segment #{index}: {reason}")]
    InvalidSegment { index: usize, reason: String },

    #[error("Segment not found: {0}")]
    UnknownSegment(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

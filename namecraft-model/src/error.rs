use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidResolution(String),
    InvalidEpisodeKind(String),
    InvalidSeriesKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidResolution(raw) => {
                write!(f, "invalid resolution: {raw:?}")
            }
            ModelError::InvalidEpisodeKind(raw) => {
                write!(f, "invalid episode kind: {raw:?}")
            }
            ModelError::InvalidSeriesKind(raw) => {
                write!(f, "invalid series kind: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;

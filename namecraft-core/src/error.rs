use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    #[error("Malformed line: {0}")]
    MalformedLine(String),

    #[error("Malformed action: {0}")]
    MalformedAction(String),

    #[error("Unknown test letter: {0}")]
    UnknownTest(char),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Test {test} cannot compare against {value:?}")]
    InvalidComparand { test: char, value: String },

    #[error("Missing metadata: {0}")]
    MissingMetadata(&'static str),
}

pub type Result<T> = std::result::Result<T, RenameError>;

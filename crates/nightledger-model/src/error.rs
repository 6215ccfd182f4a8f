use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// Required input columns are absent after label normalization.
    /// Carries the missing names so callers can report them verbatim.
    #[error("missing required columns: {0:?}")]
    MissingColumns(Vec<String>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;

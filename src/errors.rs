use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid max index: {0} (must be within 1..={limit})", limit = crate::config::MAX_INDEX_LIMIT)]
    InvalidMaxIndex(u32),

    #[error("invalid split point: {split} (must be within 1..={limit})")]
    InvalidSplit { split: u32, limit: u32 },

    #[error("invalid macro prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("index {index} is outside 1..={max_index}")]
    IndexOutOfRange { index: u32, max_index: u32 },

    #[error("I/O error: {0}")]
    Io(String),
}

impl GenError {
    /// True for the errors raised by an internally inconsistent `GeneratorConfig`.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GenError::InvalidMaxIndex(_) | GenError::InvalidSplit { .. } | GenError::InvalidPrefix(_)
        )
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        GenError::Io(e.to_string())
    }
}

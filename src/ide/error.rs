//! Error types for analysis requests.

use thiserror::Error;

/// Errors returned by [`Analysis`](super::Analysis) queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The path was never loaded into the host.
    #[error("Unknown file: {0}")]
    UnknownFile(String),

    /// The position lies past the end of its line or of the file.
    #[error("Position out of range: {line}:{col}")]
    PositionOutOfRange { line: u32, col: u32 },
}

impl AnalysisError {
    /// Create an unknown file error.
    pub fn unknown_file(path: impl Into<String>) -> Self {
        Self::UnknownFile(path.into())
    }
}

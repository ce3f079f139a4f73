use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("input file not found: {0}")]
    InputMissing(PathBuf),
    #[error("failed to read input file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input file {path} is not valid JSON: {source}")]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// Input failures the extractor may treat as an empty collection.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            IoError::InputMissing(_) | IoError::InputMalformed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, IoError>;

use crate::companies::{parse_companies, InputLayout, ParsedCollection};
use crate::error::{IoError, Result};
use std::fs;
use std::path::PathBuf;

pub trait RecordSource {
    fn source_name(&self) -> String;
    fn load(&self) -> Result<ParsedCollection>;
}

/// Reads a JSON collection from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
    pub layout: InputLayout,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, layout: InputLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }
}

impl RecordSource for FileSource {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ParsedCollection> {
        if !self.path.exists() {
            return Err(IoError::InputMissing(self.path.clone()));
        }
        let data = fs::read(&self.path).map_err(|source| IoError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_companies(&data, &self.layout).map_err(|source| IoError::InputMalformed {
            path: self.path.clone(),
            source,
        })
    }
}

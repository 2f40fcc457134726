use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("{0}")]
    Usage(String),
    #[error("Unsupported file format ({}). Please provide a .json or .xml file.", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("Failed to derive a file name from {}", path.display())]
    InvalidFileName { path: PathBuf },
    #[error("Error processing file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConversionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse { path: path.into(), message: message.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

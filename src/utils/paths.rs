use std::path::{Path, PathBuf};

use crate::errors::{ConversionError, Result};

pub trait ExtractFileName {
    /// File name without its final extension (`data/person.json` -> `person`).
    fn extract_filename(&self) -> Result<&str>;
}

impl ExtractFileName for Path {
    fn extract_filename(&self) -> Result<&str> {
        self.file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ConversionError::InvalidFileName { path: self.to_path_buf() })
    }
}

impl ExtractFileName for PathBuf {
    fn extract_filename(&self) -> Result<&str> {
        self.as_path().extract_filename()
    }
}

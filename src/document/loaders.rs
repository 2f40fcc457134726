use std::path::Path;

use crate::document::DocumentObject;
use crate::errors::{ConversionError, Result};

mod json;
mod xml;

pub use self::json::parse_json_document;
pub use self::xml::{parse_xml_document, xml_to_json};

pub fn load_json_document(path: impl AsRef<Path>) -> Result<DocumentObject> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_json_document(&text).map_err(|e| ConversionError::parse(path, e))
}

pub fn load_xml_document(path: impl AsRef<Path>) -> Result<DocumentObject> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_xml_document(&text).map_err(|e| ConversionError::parse(path, e))
}

/// Loads a document, choosing the parser from the file extension.
pub fn load_document_from_file(path: impl AsRef<Path>) -> Result<DocumentObject> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_json_document(path),
        Some("xml") => load_xml_document(path),
        _ => Err(ConversionError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}

fn read_text(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(|e| ConversionError::io(path, e))
}

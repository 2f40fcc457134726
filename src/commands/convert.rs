use std::path::{Path, PathBuf};

use crate::diagram::{render_class_diagram, DiagramOptions};
use crate::document::loaders::load_document_from_file;
use crate::errors::{ConversionError, Result};
use crate::utils::paths::ExtractFileName;

/// Converts `input_file` into `<output_directory>/<name>.txt` and returns
/// the written path.
///
/// The diagram is assembled in memory first; the output directory and file
/// are only touched once loading and rendering have succeeded.
pub fn convert(input_file: &Path, output_directory: &Path, options: &DiagramOptions) -> Result<PathBuf> {
    log::info!("Processing file {}...", input_file.display());
    let filename = input_file.extract_filename()?;
    let document = load_document_from_file(input_file)?;

    log::debug!("Rendering class diagram (direction {}, mirror {})", options.direction, options.mirror);
    let diagram = render_class_diagram(&document, filename, options);

    log::debug!("Generating output directory");
    std::fs::create_dir_all(output_directory)
        .map_err(|e| ConversionError::io(output_directory, e))?;

    let output_path = output_directory.join(format!("{}.txt", filename));
    log::info!("Writing to {}", output_path.display());
    std::fs::write(&output_path, diagram)
        .map_err(|e| ConversionError::io(&output_path, e))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Direction;

    #[test]
    fn writes_named_after_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("order.json");
        std::fs::write(&input, r#"{"customer": {"id": 7}}"#).unwrap();
        let output_dir = dir.path().join("out").join("nested");

        let options = DiagramOptions { direction: Direction::Left, mirror: false };
        let written = convert(&input, &output_dir, &options).unwrap();

        assert_eq!(written, output_dir.join("order.txt"));
        let text = std::fs::read_to_string(written).unwrap();
        assert!(text.contains("frame \"order\""));
        assert!(text.contains("    OrderRoot::customer -left- OrderRootCustomer\n"));
    }

    #[test]
    fn unsupported_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.yaml");
        std::fs::write(&input, "a: 1").unwrap();
        let output_dir = dir.path().join("out");

        let error = convert(&input, &output_dir, &DiagramOptions::default()).unwrap_err();
        assert!(matches!(error, ConversionError::UnsupportedFormat { .. }));
        assert!(!output_dir.exists());
    }
}

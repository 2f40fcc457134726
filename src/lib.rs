//! Turns JSON and XML data documents into PlantUML class diagrams of their
//! structure.

pub mod commands;
pub mod diagram;
pub mod document;
pub mod errors;
pub(crate) mod utils;

pub use crate::commands::convert::convert;
pub use crate::diagram::{render_class_diagram, DiagramOptions, Direction};
pub use crate::document::{DocumentNode, DocumentObject};
pub use crate::errors::ConversionError;

//! PlantUML class diagrams describing the schema of a data document.
//!
//! Rendering is two independent walks over the same tree: the class section
//! is emitted first, then the connection section. Both walks visit nested
//! objects through [`nested_objects`] and name them through [`ClassId`], so
//! every connection refers to a class defined above it.
//!
//! Recursion depth equals document depth; extremely deep documents can
//! exhaust the stack.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::document::{DocumentNode, DocumentObject};
use crate::errors::ConversionError;

pub mod classes;
pub mod connections;
pub mod fields;
pub mod naming;

pub use self::classes::ClassEmitter;
pub use self::connections::ConnectionEmitter;
pub use self::naming::ClassId;

const CLASSES_BANNER: &str = "/' CLASSES '/";
const CONNECTIONS_BANNER: &str = "/' CONNECTIONS '/";

/// Arrow style of the primary connections.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Default => "--",
            Direction::Up => "-up-",
            Direction::Down => "-down-",
            Direction::Left => "-left-",
            Direction::Right => "-right-",
        }
    }
}

impl FromStr for Direction {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ConversionError::Usage(
                "Invalid value for -d. Accepted values are: up, down, left, right.".to_string(),
            )),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DiagramOptions {
    pub direction: Direction,
    pub mirror: bool,
}

/// Renders the complete diagram text for `document`.
///
/// `name` is the document's base file name; it labels the enclosing frame
/// and determines the root class identifier.
pub fn render_class_diagram(document: &DocumentObject, name: &str, options: &DiagramOptions) -> String {
    let root = ClassId::root(name);

    let mut classes = ClassEmitter::new(options.mirror);
    classes.emit_root(document, &root);
    log::debug!("Emitted {} class blocks", classes.class_count());

    let mut connections = ConnectionEmitter::new(options.direction, options.mirror);
    connections.emit(document, &root);
    log::debug!("Emitted {} connections", connections.edge_count());

    let mut diagram = String::new();
    diagram.push_str(CLASSES_BANNER);
    diagram.push_str("\n\n");
    diagram.push_str(&format!("    frame \"{}\" {{\n\n", name));
    diagram.push_str(&classes.finish());
    diagram.push_str("    }\n");
    diagram.push('\n');
    diagram.push_str(CONNECTIONS_BANNER);
    diagram.push_str("\n\n");
    diagram.push_str(&connections.finish());
    diagram
}

/// An object reachable from a field: either the field's value itself or one
/// object element of an array-valued field.
#[derive(Debug, Clone, Copy)]
pub struct NestedObject<'a> {
    pub key: &'a str,
    pub index: Option<usize>,
    pub object: &'a DocumentObject,
}

impl NestedObject<'_> {
    pub fn class_id(&self, parent: &ClassId) -> ClassId {
        parent.resolve(self.key, self.index)
    }
}

/// Nested objects of `object` in field order, array elements in index order.
pub fn nested_objects(object: &DocumentObject) -> impl Iterator<Item = NestedObject<'_>> {
    object.iter().flat_map(|(key, value)| {
        let nested: Vec<NestedObject<'_>> = match value {
            DocumentNode::Object(child) => vec![NestedObject { key, index: None, object: child }],
            DocumentNode::Array(items) => items.iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    item.as_object().map(|child| NestedObject { key, index: Some(index), object: child })
                })
                .collect(),
            _ => Vec::new(),
        };
        nested
    })
}

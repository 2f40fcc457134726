use std::fmt::{Display, Formatter};

use crate::document::DocumentNode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Orange,
    Green,
    Blue,
    Red,
    Gray,
    Purple,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Gray => "gray",
            Color::Purple => "purple",
        }
    }
}

/// Element type of an array field. Only the first element is inspected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArrayType {
    Empty,
    Object,
    String,
    Integer,
    Boolean,
    Mixed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldType {
    Object,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Array(ArrayType),
}

impl FieldType {
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Object => "Object",
            FieldType::String => "String",
            FieldType::Integer => "Integer",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Null => "Null",
            FieldType::Array(ArrayType::Empty) => "Empty Array",
            FieldType::Array(ArrayType::Object) => "Object[ ]",
            FieldType::Array(ArrayType::String) => "String[ ]",
            FieldType::Array(ArrayType::Integer) => "Integer[ ]",
            FieldType::Array(ArrayType::Boolean) => "Boolean[ ]",
            FieldType::Array(ArrayType::Mixed) => "Mixed Array",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FieldType::Object => Color::Orange,
            FieldType::String => Color::Green,
            FieldType::Integer | FieldType::Float => Color::Blue,
            FieldType::Boolean => Color::Red,
            FieldType::Null => Color::Gray,
            FieldType::Array(_) => Color::Purple,
        }
    }
}

impl From<&DocumentNode> for FieldType {
    fn from(node: &DocumentNode) -> Self {
        match node {
            DocumentNode::Object(_) => FieldType::Object,
            DocumentNode::String(_) => FieldType::String,
            DocumentNode::Integer(_) => FieldType::Integer,
            DocumentNode::Float(_) => FieldType::Float,
            DocumentNode::Boolean(_) => FieldType::Boolean,
            DocumentNode::Null => FieldType::Null,
            DocumentNode::Array(items) => FieldType::Array(array_type(items)),
        }
    }
}

fn array_type(items: &[DocumentNode]) -> ArrayType {
    match items.first() {
        None => ArrayType::Empty,
        Some(DocumentNode::Object(_)) => ArrayType::Object,
        Some(DocumentNode::String(_)) => ArrayType::String,
        Some(DocumentNode::Integer(_)) => ArrayType::Integer,
        Some(DocumentNode::Boolean(_)) => ArrayType::Boolean,
        Some(DocumentNode::Float(_) | DocumentNode::Null | DocumentNode::Array(_)) => ArrayType::Mixed,
    }
}

/// A typed attribute line of a class block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry<'a> {
    pub key: &'a str,
    pub field_type: FieldType,
}

impl<'a> FieldEntry<'a> {
    pub fn new(key: &'a str, value: &DocumentNode) -> Self {
        Self { key, field_type: FieldType::from(value) }
    }
}

impl Display for FieldEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<color:{}>{}</color> {}",
               self.field_type.color().as_str(), self.field_type.label(), self.key)
    }
}

use crate::document::{DocumentNode, DocumentObject};

/// Parses JSON text whose top-level value is an object.
pub fn parse_json_document(text: &str) -> anyhow::Result<DocumentObject> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    match DocumentNode::from(value) {
        DocumentNode::Object(object) => {
            log::debug!("Parsed JSON document with {} top-level keys", object.len());
            Ok(object)
        }
        other => Err(anyhow::anyhow!(
            "Document root must be a JSON object, found {}", kind_name(&other)
        )),
    }
}

fn kind_name(node: &DocumentNode) -> &'static str {
    match node {
        DocumentNode::Object(_) => "an object",
        DocumentNode::Array(_) => "an array",
        DocumentNode::String(_) => "a string",
        DocumentNode::Integer(_) | DocumentNode::Float(_) => "a number",
        DocumentNode::Boolean(_) => "a boolean",
        DocumentNode::Null => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_objects_in_order() {
        let object = parse_json_document(r#"{"b": {"y": 1, "x": 2}, "a": null}"#).unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        let nested = object.get("b").and_then(DocumentNode::as_object).unwrap();
        assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["y", "x"]);
        assert_eq!(object.get("a"), Some(&DocumentNode::Null));
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let object = parse_json_document(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a"), Some(&DocumentNode::Integer(3)));
    }

    #[test]
    fn rejects_top_level_arrays() {
        let error = parse_json_document(r#"[{"a": 1}]"#).unwrap_err();
        assert!(error.to_string().contains("found an array"));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(parse_json_document(r#"{"a": "#).is_err());
    }
}

pub mod loaders;

/// One node of a parsed data document.
///
/// JSON maps onto this directly; XML is first converted into the equivalent
/// JSON tree by the XML loader.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Object(DocumentObject),
    Array(Vec<DocumentNode>),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl DocumentNode {
    pub fn as_object(&self) -> Option<&DocumentObject> {
        match self {
            DocumentNode::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Key/value pairs of an object node, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentObject {
    fields: Vec<(String, DocumentNode)>,
}

impl DocumentObject {
    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        self.fields.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, DocumentNode)> for DocumentObject {
    fn from_iter<T: IntoIterator<Item = (K, DocumentNode)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<serde_json::Value> for DocumentNode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DocumentNode::Null,
            serde_json::Value::Bool(b) => DocumentNode::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => DocumentNode::Integer(i),
                // u64 beyond i64::MAX and every non-integral number
                None => DocumentNode::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => DocumentNode::String(s),
            serde_json::Value::Array(items) => {
                DocumentNode::Array(items.into_iter().map(DocumentNode::from).collect())
            }
            serde_json::Value::Object(map) => DocumentNode::Object(map.into()),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for DocumentObject {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, DocumentNode::from(v)))
            .collect()
    }
}

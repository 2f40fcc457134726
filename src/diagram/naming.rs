use std::fmt::{Display, Formatter};

const ROOT_SUFFIX: &str = "Root";
const MIRROR_PREFIX: &str = "Mirror";

/// Identifier of a class in the emitted diagram, derived from the path of
/// keys (and array indices) leading to the object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId(String);

impl ClassId {
    /// Identifier of the document root: `capitalize(name) + "Root"`.
    pub fn root(document_name: &str) -> Self {
        Self(format!("{}{}", capitalize(document_name), ROOT_SUFFIX))
    }

    /// Identifier of the object stored under `key`, or of element `index`
    /// of the array stored under `key`.
    pub fn resolve(&self, key: &str, index: Option<usize>) -> Self {
        match index {
            Some(index) => Self(format!("{}{}{}", self.0, capitalize(key), index)),
            None => Self(format!("{}{}", self.0, capitalize(key))),
        }
    }

    pub fn child(&self, key: &str) -> Self {
        self.resolve(key, None)
    }

    pub fn element(&self, key: &str, index: usize) -> Self {
        self.resolve(key, Some(index))
    }

    pub fn mirror(&self) -> Self {
        Self(format!("{}{}", MIRROR_PREFIX, self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ClassId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_only_touches_first_character() {
        assert_eq!(capitalize("person"), "Person");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("ALREADY"), "ALREADY");
        assert_eq!(capitalize("_id"), "_id");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn root_is_capitalized_document_name() {
        assert_eq!(ClassId::root("doc").as_str(), "DocRoot");
        assert_eq!(ClassId::root("my-data").as_str(), "My-dataRoot");
    }

    #[test]
    fn nested_identifiers_follow_the_path() {
        let root = ClassId::root("doc");
        let address = root.child("address");
        assert_eq!(address.as_str(), "DocRootAddress");
        assert_eq!(address.child("geo").as_str(), "DocRootAddressGeo");
        assert_eq!(root.element("items", 0).as_str(), "DocRootItems0");
        assert_eq!(root.element("items", 12).child("tags").as_str(), "DocRootItems12Tags");
    }

    #[test]
    fn resolution_is_deterministic() {
        let root = ClassId::root("doc");
        assert_eq!(root.resolve("a", Some(3)), root.resolve("a", Some(3)));
        assert_ne!(root.resolve("a", Some(3)), root.resolve("a", None));
    }

    #[test]
    fn empty_keys_add_nothing() {
        let root = ClassId::root("doc");
        assert_eq!(root.child(""), root);
        assert_eq!(root.element("", 1).as_str(), "DocRoot1");
    }

    #[test]
    fn mirror_prefixes_identifier() {
        let id = ClassId::root("doc").child("a");
        assert_eq!(id.mirror().to_string(), "MirrorDocRootA");
    }
}

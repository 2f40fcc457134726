use itertools::Itertools;

use crate::diagram::fields::FieldEntry;
use crate::diagram::naming::ClassId;
use crate::diagram::nested_objects;
use crate::document::DocumentObject;

const CLASS_INDENT: &str = "        ";
const FIELD_INDENT: &str = "            ";
const FIELD_DIVIDER: &str = "---";

/// Display label of the root class and of array element classes.
pub const ANONYMOUS_LABEL: &str = " ";

/// Emits one class block per object node, depth-first in field order.
pub struct ClassEmitter {
    mirror: bool,
    buffer: String,
    class_count: usize,
}

impl ClassEmitter {
    pub fn new(mirror: bool) -> Self {
        Self { mirror, buffer: String::new(), class_count: 0 }
    }

    /// Emits the root class and every class below it. The root never gets a
    /// mirror class.
    pub fn emit_root(&mut self, document: &DocumentObject, root: &ClassId) {
        self.emit(document, root, ANONYMOUS_LABEL, true);
    }

    fn emit(&mut self, object: &DocumentObject, class_id: &ClassId, label: &str, is_root: bool) {
        let fields = render_fields(object);
        self.push_class(class_id, label, &fields);

        for nested in nested_objects(object) {
            let child_label = match nested.index {
                Some(_) => ANONYMOUS_LABEL,
                None => nested.key,
            };
            self.emit(nested.object, &nested.class_id(class_id), child_label, false);
        }

        if self.mirror && !is_root {
            self.push_class(&class_id.mirror(), label, &fields);
        }
    }

    fn push_class(&mut self, class_id: &ClassId, label: &str, fields: &str) {
        self.buffer.push_str(&format!("{}class {} as \"{}\" {{\n", CLASS_INDENT, class_id, label));
        self.buffer.push_str(fields);
        self.buffer.push_str(&format!("{}}}\n\n", CLASS_INDENT));
        self.class_count += 1;
    }

    pub fn class_count(&self) -> usize {
        self.class_count
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Field lines of one class, separated by divider lines.
fn render_fields(object: &DocumentObject) -> String {
    let divider = format!("{}{}\n", FIELD_INDENT, FIELD_DIVIDER);
    object.iter()
        .map(|(key, value)| format!("{}{}\n", FIELD_INDENT, FieldEntry::new(key, value)))
        .join(&divider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentNode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn emit(value: serde_json::Value, mirror: bool) -> String {
        let DocumentNode::Object(document) = DocumentNode::from(value) else {
            panic!("test documents must be objects")
        };
        let mut emitter = ClassEmitter::new(mirror);
        emitter.emit_root(&document, &ClassId::root("doc"));
        emitter.finish()
    }

    fn class_ids(output: &str) -> Vec<&str> {
        output.lines()
            .filter_map(|line| line.trim_start().strip_prefix("class "))
            .filter_map(|rest| rest.split_whitespace().next())
            .collect()
    }

    #[test]
    fn fields_follow_key_order_with_dividers() {
        let output = emit(json!({"z": null, "a": 1.5, "m": []}), false);
        let expected = "        class DocRoot as \" \" {
            <color:gray>Null</color> z
            ---
            <color:blue>Float</color> a
            ---
            <color:purple>Empty Array</color> m
        }

";
        assert_eq!(output, expected);
    }

    #[test]
    fn children_are_emitted_depth_first_in_key_order() {
        let output = emit(json!({
            "b": {"inner": {"deep": true}},
            "a": [{"x": 1}, 7, {"y": 2}],
            "c": {"v": "s"}
        }), false);
        assert_eq!(
            class_ids(&output),
            vec!["DocRoot", "DocRootB", "DocRootBInner", "DocRootA0", "DocRootA2", "DocRootC"]
        );
    }

    #[test]
    fn labels_use_key_for_objects_and_placeholder_for_elements() {
        let output = emit(json!({"owner": {"n": 1}, "list": [{"n": 2}]}), false);
        assert!(output.contains("class DocRootOwner as \"owner\" {"));
        assert!(output.contains("class DocRootList0 as \" \" {"));
    }

    #[test]
    fn mirror_follows_the_subtree_and_skips_root() {
        let output = emit(json!({"a": {"b": {"c": 1}}}), true);
        assert_eq!(
            class_ids(&output),
            vec!["DocRoot", "DocRootA", "DocRootAB", "MirrorDocRootAB", "MirrorDocRootA"]
        );
    }

    #[test]
    fn mirror_copies_field_block() {
        let output = emit(json!({"a": {"k": "v", "n": 3}}), true);
        let original = output.split("class DocRootA as \"a\" {\n").nth(1).unwrap();
        let mirrored = output.split("class MirrorDocRootA as \"a\" {\n").nth(1).unwrap();
        let body = |s: &str| s.split("        }\n").next().unwrap().to_string();
        assert_eq!(body(original), body(mirrored));
    }

    #[test]
    fn keys_ending_in_root_still_get_mirrors() {
        let output = emit(json!({"treeRoot": {"x": 1}}), true);
        assert!(class_ids(&output).contains(&"MirrorDocRootTreeRoot"));
    }

    #[test]
    fn counts_emitted_blocks() {
        let DocumentNode::Object(document) = DocumentNode::from(json!({"a": {}, "b": [{}, {}]})) else {
            unreachable!()
        };
        let mut emitter = ClassEmitter::new(true);
        emitter.emit_root(&document, &ClassId::root("doc"));
        assert_eq!(emitter.class_count(), 7);
    }
}

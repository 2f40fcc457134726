use crate::diagram::naming::ClassId;
use crate::diagram::{nested_objects, Direction};
use crate::document::DocumentObject;

const EDGE_INDENT: &str = "    ";

/// Mirror edges always point up, whatever the configured direction.
const MIRROR_DIRECTION: Direction = Direction::Up;

/// Emits one edge per nested object, linking the parent's field to the
/// child's class.
pub struct ConnectionEmitter {
    direction: Direction,
    mirror: bool,
    buffer: String,
    edge_count: usize,
}

impl ConnectionEmitter {
    pub fn new(direction: Direction, mirror: bool) -> Self {
        Self { direction, mirror, buffer: String::new(), edge_count: 0 }
    }

    pub fn emit(&mut self, object: &DocumentObject, class_id: &ClassId) {
        for nested in nested_objects(object) {
            let child_id = nested.class_id(class_id);
            self.push_edge(class_id, nested.key, self.direction, &child_id);
            self.emit(nested.object, &child_id);
            if self.mirror {
                self.push_edge(class_id, nested.key, MIRROR_DIRECTION, &child_id.mirror());
            }
        }
    }

    fn push_edge(&mut self, from: &ClassId, key: &str, direction: Direction, to: &ClassId) {
        self.buffer.push_str(&format!("{}{}::{} {} {}\n", EDGE_INDENT, from, key, direction, to));
        self.edge_count += 1;
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

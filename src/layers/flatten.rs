//! Flattening a node's descendants into name-path keyed layers

use crate::document::{DocumentTree, Node, NodeId};

/// One descendant of a flattened node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedLayer {
    /// Slash-joined names from the flattened node down to this layer, e.g. `Icon/Glyph`
    pub name_path: String,
    pub node_id: NodeId,
    /// Slash-joined child indices with a trailing slash, e.g. `1/0/`
    pub structural_path: String,
}

/// Flatten every descendant of `root` (excluding `root` itself) in pre-order.
///
/// Uses an explicit stack, so arbitrarily deep documents are fine.
pub fn flatten(doc: &DocumentTree, root: &Node) -> Vec<FlattenedLayer> {
    let mut layers = Vec::new();
    let mut stack: Vec<(&Node, String, String)> = Vec::new();

    push_children(doc, root, "", "", &mut stack);
    while let Some((node, name_path, structural_path)) = stack.pop() {
        if node.has_children() {
            push_children(doc, node, &name_path, &structural_path, &mut stack);
        }
        layers.push(FlattenedLayer {
            name_path,
            node_id: node.id.clone(),
            structural_path,
        });
    }

    layers
}

/// Push the children of `parent` so the first child is popped first
fn push_children<'a>(
    doc: &'a DocumentTree,
    parent: &'a Node,
    name_prefix: &str,
    structural_prefix: &str,
    stack: &mut Vec<(&'a Node, String, String)>,
) {
    let start = stack.len();
    for (index, child) in doc.children(parent).enumerate() {
        let name_path = if name_prefix.is_empty() {
            child.name.clone()
        } else {
            format!("{}/{}", name_prefix, child.name)
        };
        let structural_path = format!("{}{}/", structural_prefix, index);
        stack.push((child, name_path, structural_path));
    }
    stack[start..].reverse();
}

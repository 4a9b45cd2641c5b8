//! Normalizing a selection to an analyzable component or variant set

use crate::document::{DocumentTree, Node, NodeId, NodeType};
use crate::error::NoTarget;

/// The node the layer groups are built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target<'a> {
    /// A component that is not part of a variant set
    Component(&'a Node),
    /// A variant set; its component children are the variants
    ComponentSet(&'a Node),
}

impl<'a> Target<'a> {
    pub fn node(&self) -> &'a Node {
        match self {
            Target::Component(node) | Target::ComponentSet(node) => node,
        }
    }
}

/// Classify `node` as a standalone component or a variant set.
///
/// A variant (a component whose parent is a variant set) resolves to its
/// parent so the whole family is analyzed. Returns `None` for any other
/// node type.
pub fn resolve<'a>(doc: &'a DocumentTree, node: &'a Node) -> Option<Target<'a>> {
    match node.node_type {
        NodeType::ComponentSet => Some(Target::ComponentSet(node)),
        NodeType::Component => match doc.parent(node) {
            Some(parent) if parent.node_type == NodeType::ComponentSet => {
                Some(Target::ComponentSet(parent))
            }
            _ => Some(Target::Component(node)),
        },
        _ => None,
    }
}

/// Work out which node the user meant by the current selection.
///
/// Only the first selected node is considered. Instances stand in for
/// their main component, and containers for the first component-like node
/// inside them. Other nodes are returned unchanged for [`resolve`] to reject.
pub fn pick_candidate<'a>(
    doc: &'a DocumentTree,
    selection: &[NodeId],
) -> Result<&'a Node, NoTarget> {
    let node = selection
        .first()
        .and_then(|id| doc.get(id))
        .ok_or(NoTarget::EmptySelection)?;

    match node.node_type {
        NodeType::Instance => main_component(doc, node),
        NodeType::Component | NodeType::ComponentSet => Ok(node),
        kind if kind.is_container() => {
            let found = first_component_like(doc, node).ok_or_else(|| {
                NoTarget::NoComponentInside {
                    container: node.name.clone(),
                }
            })?;
            if found.node_type == NodeType::Instance {
                main_component(doc, found)
            } else {
                Ok(found)
            }
        }
        _ => Ok(node),
    }
}

fn main_component<'a>(doc: &'a DocumentTree, instance: &'a Node) -> Result<&'a Node, NoTarget> {
    instance
        .main_component
        .as_ref()
        .and_then(|id| doc.get(id))
        .ok_or_else(|| NoTarget::MissingMainComponent {
            instance: instance.name.clone(),
        })
}

/// First component, variant set or instance below `root`, in pre-order
fn first_component_like<'a>(doc: &'a DocumentTree, root: &'a Node) -> Option<&'a Node> {
    let mut stack: Vec<&Node> = doc.children(root).collect();
    stack.reverse();
    while let Some(node) = stack.pop() {
        if matches!(
            node.node_type,
            NodeType::Component | NodeType::ComponentSet | NodeType::Instance
        ) {
            return Some(node);
        }
        let start = stack.len();
        stack.extend(doc.children(node));
        stack[start..].reverse();
    }
    None
}

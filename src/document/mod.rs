//! Read-only model of the host document
//!
//! The host owns the real document; this module holds the subset of it the
//! analysis reads: node kinds, names, ids, child order, parent links and
//! component property declarations.

mod node;
mod snapshot;

pub use node::{Node, NodeId, NodeType, PropertyDefinition, PropertyKind};
pub use snapshot::DocumentSnapshot;

use std::collections::HashMap;

use crate::error::DocumentError;

/// Arena of document nodes with by-identifier lookup
#[derive(Debug, Clone, Default)]
pub struct DocumentTree {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    root: Option<NodeId>,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` (or as the root when `parent` is `None`).
    ///
    /// The node's `children` and `parent` fields are managed by the tree and
    /// overwritten. Returns the id of the inserted node.
    pub fn insert(
        &mut self,
        parent: Option<&NodeId>,
        mut node: Node,
    ) -> Result<NodeId, DocumentError> {
        if self.index.contains_key(&node.id) {
            return Err(DocumentError::DuplicateId { id: node.id });
        }
        node.children.clear();
        node.parent = parent.cloned();

        let id = node.id.clone();
        match parent {
            Some(parent_id) => {
                let slot = *self
                    .index
                    .get(parent_id)
                    .ok_or_else(|| DocumentError::UnknownParent {
                        id: parent_id.clone(),
                    })?;
                self.nodes[slot].children.push(id.clone());
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(id.clone());
                }
            }
        }

        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Look up a node by id; `None` if the id is not in the document
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().and_then(|id| self.get(id))
    }

    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent.as_ref().and_then(|id| self.get(id))
    }

    /// Direct children of `node`, in document order
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().filter_map(move |id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

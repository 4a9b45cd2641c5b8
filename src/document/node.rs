//! Node types mirrored from the host document

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier, unique within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Document,
    Page,
    Component,
    ComponentSet,
    Instance,
    Frame,
    Group,
    Section,
    Text,
    Vector,
    Rectangle,
    Ellipse,
    Other,
}

impl NodeType {
    /// Map a host type tag (e.g. `COMPONENT_SET`) to a node type
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DOCUMENT" => NodeType::Document,
            "PAGE" => NodeType::Page,
            "COMPONENT" => NodeType::Component,
            "COMPONENT_SET" => NodeType::ComponentSet,
            "INSTANCE" => NodeType::Instance,
            "FRAME" => NodeType::Frame,
            "GROUP" => NodeType::Group,
            "SECTION" => NodeType::Section,
            "TEXT" => NodeType::Text,
            "VECTOR" => NodeType::Vector,
            "RECTANGLE" => NodeType::Rectangle,
            "ELLIPSE" => NodeType::Ellipse,
            _ => NodeType::Other,
        }
    }

    /// Frames, groups and sections: nodes a user selects around a component
    pub fn is_container(self) -> bool {
        matches!(self, NodeType::Frame | NodeType::Group | NodeType::Section)
    }
}

/// The kind of a component property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// Discrete choice between the listed values, in declaration order
    Variant(Vec<String>),
    /// Two-valued switch, materialized as `True` / `False`
    Boolean,
    /// Text, instance-swap and anything else the host may add
    Other(String),
}

/// A declared axis of variation on a component set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub kind: PropertyKind,
}

impl PropertyDefinition {
    pub fn variant<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: PropertyKind::Variant(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Boolean,
        }
    }

    pub fn other(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PropertyKind::Other(tag.into()),
        }
    }

    /// Values to enumerate for this property, or `None` if its kind is not enumerable
    pub fn values(&self) -> Option<Vec<&str>> {
        match &self.kind {
            PropertyKind::Variant(values) => Some(values.iter().map(String::as_str).collect()),
            PropertyKind::Boolean => Some(vec!["True", "False"]),
            PropertyKind::Other(_) => None,
        }
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub node_type: NodeType,
    /// Child ids in document order; empty for leaves
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Declared properties, in declaration order (component sets only)
    pub properties: Vec<PropertyDefinition>,
    /// Template of an instance
    pub main_component: Option<NodeId>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            children: Vec::new(),
            parent: None,
            properties: Vec::new(),
            main_component: None,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_from_tag() {
        assert_eq!(NodeType::from_tag("COMPONENT_SET"), NodeType::ComponentSet);
        assert_eq!(NodeType::from_tag("INSTANCE"), NodeType::Instance);
        assert_eq!(NodeType::from_tag("BOOLEAN_OPERATION"), NodeType::Other);
    }

    #[test]
    fn test_containers() {
        assert!(NodeType::Frame.is_container());
        assert!(NodeType::Section.is_container());
        assert!(!NodeType::Component.is_container());
        assert!(!NodeType::Text.is_container());
    }

    #[test]
    fn test_property_values() {
        let state = PropertyDefinition::variant("State", ["Default", "Hover"]);
        assert_eq!(state.values(), Some(vec!["Default", "Hover"]));

        let icon = PropertyDefinition::boolean("Has icon");
        assert_eq!(icon.values(), Some(vec!["True", "False"]));

        let label = PropertyDefinition::other("Label", "TEXT");
        assert_eq!(label.values(), None);
    }
}

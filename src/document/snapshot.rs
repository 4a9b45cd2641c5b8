//! JSON snapshots of a host document
//!
//! A snapshot captures a node tree and the current selection so analysis
//! can run outside the host, in tests and from the command line.

use std::path::Path;

use serde::Deserialize;

use super::{DocumentTree, Node, NodeId, NodeType, PropertyDefinition, PropertyKind};
use crate::error::DocumentError;

/// A document tree together with the selection at capture time
#[derive(Debug, Clone, Default)]
pub struct DocumentSnapshot {
    pub tree: DocumentTree,
    pub selection: Vec<NodeId>,
}

/// JSON structure for deserializing snapshots
#[derive(Deserialize)]
struct JsonSnapshot {
    root: JsonNode,
    #[serde(default)]
    selection: Vec<NodeId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonNode {
    id: NodeId,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    children: Vec<JsonNode>,
    #[serde(default)]
    component_property_definitions: Vec<JsonProperty>,
    #[serde(default)]
    main_component_id: Option<NodeId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonProperty {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    variant_options: Option<Vec<String>>,
}

impl From<JsonProperty> for PropertyDefinition {
    fn from(raw: JsonProperty) -> Self {
        let kind = match raw.kind.as_str() {
            // A variant property without options yields no values rather than an error
            "VARIANT" => PropertyKind::Variant(raw.variant_options.unwrap_or_default()),
            "BOOLEAN" => PropertyKind::Boolean,
            _ => PropertyKind::Other(raw.kind),
        };
        PropertyDefinition {
            name: raw.name,
            kind,
        }
    }
}

impl DocumentSnapshot {
    /// Load a snapshot from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a snapshot from a JSON string
    ///
    /// Nesting depth is unbounded: the parser grows its stack on demand
    /// instead of stopping at serde_json's default recursion limit.
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        let mut json = serde_json::Deserializer::from_str(content);
        json.disable_recursion_limit();
        let parsed = JsonSnapshot::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;

        let mut tree = DocumentTree::new();
        let mut pending: Vec<(Option<NodeId>, JsonNode)> = vec![(None, parsed.root)];
        while let Some((parent, raw)) = pending.pop() {
            let mut node = Node::new(raw.id, raw.name, NodeType::from_tag(&raw.node_type));
            node.properties = raw
                .component_property_definitions
                .into_iter()
                .map(PropertyDefinition::from)
                .collect();
            node.main_component = raw.main_component_id;

            let id = tree.insert(parent.as_ref(), node)?;
            // Reversed so children are inserted, and therefore ordered, as declared
            for child in raw.children.into_iter().rev() {
                pending.push((Some(id.clone()), child));
            }
        }

        // Main component links are left unchecked; a dangling one is reported at analysis time
        for id in &parsed.selection {
            if !tree.contains(id) {
                return Err(DocumentError::UnknownSelection { id: id.clone() });
            }
        }

        Ok(DocumentSnapshot {
            tree,
            selection: parsed.selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "selection": ["2:1"],
        "root": {
            "id": "0:1", "name": "Page", "type": "PAGE",
            "children": [
                {
                    "id": "2:1", "name": "Button", "type": "COMPONENT_SET",
                    "componentPropertyDefinitions": [
                        { "name": "State", "type": "VARIANT", "variantOptions": ["Default", "Hover"] },
                        { "name": "Icon", "type": "BOOLEAN" },
                        { "name": "Label", "type": "TEXT" },
                        { "name": "Size", "type": "VARIANT" }
                    ],
                    "children": [
                        { "id": "2:2", "name": "State=Default", "type": "COMPONENT" },
                        { "id": "2:3", "name": "State=Hover", "type": "COMPONENT" }
                    ]
                },
                { "id": "3:1", "name": "Button", "type": "INSTANCE", "mainComponentId": "2:2" }
            ]
        }
    }"#;

    #[test]
    fn test_load_snapshot() {
        let snapshot = DocumentSnapshot::from_json(SNAPSHOT).expect("Should load");
        assert_eq!(snapshot.selection, vec![NodeId::from("2:1")]);
        assert_eq!(snapshot.tree.len(), 5);

        let set = snapshot.tree.get(&NodeId::from("2:1")).unwrap();
        assert_eq!(set.node_type, NodeType::ComponentSet);
        let variants: Vec<_> = snapshot
            .tree
            .children(set)
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(variants, vec!["State=Default", "State=Hover"]);

        let instance = snapshot.tree.get(&NodeId::from("3:1")).unwrap();
        assert_eq!(instance.main_component, Some(NodeId::from("2:2")));
    }

    #[test]
    fn test_property_kinds_keep_declaration_order() {
        let snapshot = DocumentSnapshot::from_json(SNAPSHOT).expect("Should load");
        let set = snapshot.tree.get(&NodeId::from("2:1")).unwrap();
        assert_eq!(
            set.properties,
            vec![
                PropertyDefinition::variant("State", ["Default", "Hover"]),
                PropertyDefinition::boolean("Icon"),
                PropertyDefinition::other("Label", "TEXT"),
                PropertyDefinition::variant("Size", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn test_unknown_selection_rejected() {
        let json = r#"{ "selection": ["9:9"], "root": { "id": "0:1", "type": "PAGE" } }"#;
        let result = DocumentSnapshot::from_json(json);
        assert!(matches!(result, Err(DocumentError::UnknownSelection { .. })));
    }

    fn nested_frames(depth: usize) -> String {
        let mut json = String::from(r#"{"root":"#);
        for i in 0..depth {
            json.push_str(&format!(
                r#"{{"id":"f{}","name":"F","type":"FRAME","children":["#,
                i
            ));
        }
        json.push_str(r#"{"id":"leaf","name":"Leaf","type":"TEXT"}"#);
        for _ in 0..depth {
            json.push_str("]}");
        }
        json.push('}');
        json
    }

    #[test]
    fn test_deeply_nested_document_loads() {
        let snapshot = DocumentSnapshot::from_json(&nested_frames(600)).expect("Should load");
        assert_eq!(snapshot.tree.len(), 601);

        let root = snapshot.tree.root().unwrap();
        let layers = crate::layers::flatten(&snapshot.tree, root);
        assert_eq!(layers.len(), 600);
        let deepest = layers.last().unwrap();
        assert_eq!(deepest.node_id, NodeId::from("leaf"));
        assert_eq!(deepest.name_path.split('/').count(), 600);
        assert!(deepest.name_path.ends_with("F/Leaf"));
    }

    #[test]
    fn test_trailing_content_rejected() {
        let json = r#"{ "root": { "id": "0:1", "type": "PAGE" } } extra"#;
        let result = DocumentSnapshot::from_json(json);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn test_invalid_json_error() {
        let result = DocumentSnapshot::from_json("{ not json");
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }
}

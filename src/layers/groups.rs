//! Building property groups of deduplicated layers
//!
//! For a variant set, each enumerable property becomes a group and each of
//! its values an option. The layers of every variant matching `property=value`
//! are merged by name path, so the same conceptual layer across those
//! variants becomes one selectable entry carrying all of its node ids.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::flatten::{flatten, FlattenedLayer};
use super::resolve::Target;
use crate::config::PluginConfig;
use crate::document::{DocumentTree, Node, NodeId, NodeType};

/// A layer identified by its name path, with every node sharing that path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueLayer {
    pub name: String,
    /// Structural path of the first occurrence
    pub path: String,
    pub node_ids: Vec<NodeId>,
}

/// One value of a property and the layers of its matching variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerOption {
    pub value: String,
    pub unique_layers: Vec<UniqueLayer>,
}

/// A property with at least one option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyGroup {
    pub property_name: String,
    pub options: Vec<LayerOption>,
}

/// Folds flattened layers into unique layers keyed by name path
#[derive(Debug, Default)]
struct LayerMerger {
    layers: Vec<UniqueLayer>,
    by_name: HashMap<String, usize>,
}

impl LayerMerger {
    fn add(&mut self, layers: Vec<FlattenedLayer>) {
        for layer in layers {
            match self.by_name.get(&layer.name_path) {
                Some(&slot) => self.layers[slot].node_ids.push(layer.node_id),
                None => {
                    self.by_name.insert(layer.name_path.clone(), self.layers.len());
                    self.layers.push(UniqueLayer {
                        name: layer.name_path,
                        path: layer.structural_path,
                        node_ids: vec![layer.node_id],
                    });
                }
            }
        }
    }

    fn finish(self) -> Vec<UniqueLayer> {
        self.layers
    }
}

/// Build the property groups for an analysis target
pub fn build_groups(
    doc: &DocumentTree,
    target: Target<'_>,
    config: &PluginConfig,
) -> Vec<PropertyGroup> {
    match target {
        Target::Component(component) => vec![component_group(doc, component, config)],
        Target::ComponentSet(set) => variant_groups(doc, set),
    }
}

fn component_group(doc: &DocumentTree, component: &Node, config: &PluginConfig) -> PropertyGroup {
    let mut merger = LayerMerger::default();
    merger.add(flatten(doc, component));

    let value = if component.name.is_empty() {
        config.unnamed_component.clone()
    } else {
        component.name.clone()
    };

    PropertyGroup {
        property_name: config.component_group_label.clone(),
        options: vec![LayerOption {
            value,
            unique_layers: merger.finish(),
        }],
    }
}

fn variant_groups(doc: &DocumentTree, set: &Node) -> Vec<PropertyGroup> {
    let variants: Vec<&Node> = doc
        .children(set)
        .filter(|child| child.node_type == NodeType::Component)
        .collect();

    let mut groups = Vec::new();
    for property in &set.properties {
        let Some(values) = property.values() else {
            tracing::debug!(property = %property.name, "skipping non-enumerable property");
            continue;
        };

        let mut options = Vec::new();
        for value in values {
            let matching: Vec<&Node> = variants
                .iter()
                .copied()
                .filter(|variant| variant_matches(&variant.name, &property.name, value))
                .collect();
            if matching.is_empty() {
                continue;
            }

            let mut merger = LayerMerger::default();
            for variant in matching {
                merger.add(flatten(doc, variant));
            }
            options.push(LayerOption {
                value: value.to_string(),
                unique_layers: merger.finish(),
            });
        }

        if !options.is_empty() {
            groups.push(PropertyGroup {
                property_name: property.name.clone(),
                options,
            });
        }
    }
    groups
}

/// Whether a variant name such as `State=Hover, Size=Large` contains the
/// exact token `property=value`.
///
/// Tokens are separated by `", "` exactly as the host writes them; names
/// delimited any other way simply do not match.
pub fn variant_matches(variant_name: &str, property: &str, value: &str) -> bool {
    let expected = format!("{}={}", property, value);
    variant_name.split(", ").any(|token| token == expected)
}

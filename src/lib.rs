//! Layer Select - pick every occurrence of a layer across component variants
//!
//! This library inventories the layers of a design component, or of every
//! variant in a variant set, and groups them by property value so one click
//! can select the same layer in all matching variants.
//!
//! # Example
//!
//! ```rust
//! use layer_select::{analyze_selection, DocumentSnapshot, PluginConfig, UiMessage};
//!
//! let snapshot = DocumentSnapshot::from_json(r#"{
//!     "selection": ["1:1"],
//!     "root": { "id": "1:1", "name": "Avatar", "type": "COMPONENT", "children": [
//!         { "id": "1:2", "name": "Ring", "type": "ELLIPSE" }
//!     ] }
//! }"#).unwrap();
//!
//! let message = analyze_selection(&snapshot.tree, &snapshot.selection, &PluginConfig::default());
//! match message {
//!     UiMessage::LoadGroups { data } => assert_eq!(data[0].options[0].unique_layers[0].name, "Ring"),
//!     UiMessage::NoSelection { message } => panic!("{}", message),
//! }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod layers;
pub mod plugin;

pub use config::{ConfigError, PluginConfig};
pub use document::{DocumentSnapshot, DocumentTree, Node, NodeId, NodeType, PropertyDefinition};
pub use error::{DocumentError, Error, HostError, NoTarget};
pub use layers::{build_groups, flatten, pick_candidate, resolve, PropertyGroup, Target};
pub use layers::{LayerOption, UniqueLayer};
pub use plugin::{Host, LayerSelector, MemoryHost, Notification, PluginMessage, UiMessage};

/// Analyze a selection once, without keeping any session state
///
/// # Example
///
/// ```rust
/// use layer_select::{analyze_selection, DocumentTree, PluginConfig, UiMessage};
///
/// let message = analyze_selection(&DocumentTree::new(), &[], &PluginConfig::default());
/// assert!(matches!(message, UiMessage::NoSelection { .. }));
/// ```
pub fn analyze_selection(
    doc: &DocumentTree,
    selection: &[NodeId],
    config: &PluginConfig,
) -> UiMessage {
    LayerSelector::new(config.clone()).analyze(doc, selection)
}

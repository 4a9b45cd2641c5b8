//! Error types for analysis, document loading and host interaction

use thiserror::Error;

use crate::config::ConfigError;
use crate::document::NodeId;

/// Reasons a selection cannot be analyzed
///
/// The display text is shown to the user verbatim in the `no-selection`
/// message, so it is phrased for people rather than for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoTarget {
    #[error("Select a component or component set to list its layers.")]
    EmptySelection,

    #[error("Instance '{instance}' has no main component to analyze.")]
    MissingMainComponent { instance: String },

    #[error("'{container}' does not contain a component or instance.")]
    NoComponentInside { container: String },

    #[error("'{name}' is not a component or component set.")]
    NotAComponent { name: String },
}

/// Errors that can occur while loading a document snapshot
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse document snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate node id '{id}'")]
    DuplicateId { id: NodeId },

    #[error("parent node '{id}' is not in the document")]
    UnknownParent { id: NodeId },

    #[error("selection references unknown node '{id}'")]
    UnknownSelection { id: NodeId },
}

/// Failures reported by the host while applying side effects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The presentation layer is gone; messages can no longer be delivered
    #[error("message channel to the UI is closed")]
    ChannelClosed,

    #[error("viewport update failed: {reason}")]
    Viewport { reason: String },
}

impl HostError {
    pub fn viewport(reason: impl Into<String>) -> Self {
        Self::Viewport {
            reason: reason.into(),
        }
    }
}

/// Top-level error for the command line tool
#[derive(Debug, Error)]
pub enum Error {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("failed to encode message: {0}")]
    Message(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_target_messages_are_user_facing() {
        let err = NoTarget::NotAComponent {
            name: "Rectangle 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'Rectangle 4' is not a component or component set."
        );
        assert!(NoTarget::EmptySelection.to_string().starts_with("Select"));
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::DuplicateId {
            id: NodeId::from("1:2"),
        };
        assert!(err.to_string().contains("1:2"));
    }

    #[test]
    fn test_error_from_host_error() {
        let err: Error = HostError::ChannelClosed.into();
        assert!(matches!(err, Error::Host(HostError::ChannelClosed)));
        assert!(err.to_string().contains("closed"));
    }
}

//! The host application seen from the plugin

use crate::document::{DocumentSnapshot, DocumentTree, NodeId};
use crate::error::HostError;

use super::messages::{Notification, UiMessage};

/// Side effects and document access provided by the host
pub trait Host {
    /// The current document
    fn document(&self) -> &DocumentTree;

    fn current_selection(&self) -> Vec<NodeId>;

    /// Replace the current selection
    fn set_selection(&mut self, ids: Vec<NodeId>);

    /// Scroll and zoom the viewport so the given nodes are visible
    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) -> Result<(), HostError>;

    fn notify(&mut self, notification: Notification);

    /// Deliver a message to the UI
    fn post_message(&mut self, message: UiMessage) -> Result<(), HostError>;
}

/// Host backed by an in-memory document that records every side effect
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub document: DocumentTree,
    pub selection: Vec<NodeId>,
    /// Nodes most recently brought into view
    pub viewport: Vec<NodeId>,
    pub notifications: Vec<Notification>,
    pub outbox: Vec<UiMessage>,
    /// When set, posting a message fails with [`HostError::ChannelClosed`]
    pub channel_closed: bool,
}

impl MemoryHost {
    pub fn new(document: DocumentTree) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: Vec<NodeId>) -> Self {
        self.selection = selection;
        self
    }

    pub fn last_message(&self) -> Option<&UiMessage> {
        self.outbox.last()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl From<DocumentSnapshot> for MemoryHost {
    fn from(snapshot: DocumentSnapshot) -> Self {
        MemoryHost::new(snapshot.tree).with_selection(snapshot.selection)
    }
}

impl Host for MemoryHost {
    fn document(&self) -> &DocumentTree {
        &self.document
    }

    fn current_selection(&self) -> Vec<NodeId> {
        self.selection.clone()
    }

    fn set_selection(&mut self, ids: Vec<NodeId>) {
        self.selection = ids;
    }

    fn scroll_and_zoom_into_view(&mut self, ids: &[NodeId]) -> Result<(), HostError> {
        if let Some(missing) = ids.iter().find(|id| !self.document.contains(id)) {
            return Err(HostError::viewport(format!(
                "node '{}' is not on the canvas",
                missing
            )));
        }
        self.viewport = ids.to_vec();
        Ok(())
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn post_message(&mut self, message: UiMessage) -> Result<(), HostError> {
        if self.channel_closed {
            return Err(HostError::ChannelClosed);
        }
        self.outbox.push(message);
        Ok(())
    }
}

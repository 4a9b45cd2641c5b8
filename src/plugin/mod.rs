//! Plugin coordinator
//!
//! [`LayerSelector`] ties the layer analysis to the host: it analyzes the
//! current selection (debounced when driven by selection-change events),
//! posts the resulting groups to the UI, and turns the UI's `select-layers`
//! requests back into a live selection.
//!
//! It owns the only piece of mutable state, the currently analyzed node.
//! That node is set by every successful run and cleared by every failed
//! one; selection requests are refused while it is unset.

pub mod debounce;
pub mod host;
pub mod messages;

pub use debounce::Debouncer;
pub use host::{Host, MemoryHost};
pub use messages::{Notification, PluginMessage, UiMessage};

use std::time::{Duration, Instant};

use crate::config::PluginConfig;
use crate::document::{DocumentTree, NodeId};
use crate::error::{HostError, NoTarget};
use crate::layers::{build_groups, pick_candidate, resolve};

const STALE_SELECTION: &str = "The selection changed. Select a component again and retry.";

/// Coordinates analysis runs and selection requests for one plugin session
#[derive(Debug)]
pub struct LayerSelector {
    config: PluginConfig,
    analyzed: Option<NodeId>,
    debouncer: Debouncer,
}

impl Default for LayerSelector {
    fn default() -> Self {
        Self::new(PluginConfig::default())
    }
}

impl LayerSelector {
    pub fn new(config: PluginConfig) -> Self {
        let debouncer = Debouncer::new(config.debounce());
        Self {
            config,
            analyzed: None,
            debouncer,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// The component or variant set of the last successful run
    pub fn analyzed(&self) -> Option<&NodeId> {
        self.analyzed.as_ref()
    }

    /// Analyze `selection` and produce the message for the UI.
    ///
    /// Records the analyzed node on success and clears it otherwise.
    pub fn analyze(&mut self, doc: &DocumentTree, selection: &[NodeId]) -> UiMessage {
        let candidate = match pick_candidate(doc, selection) {
            Ok(node) => node,
            Err(reason) => return self.reject(reason),
        };
        let Some(target) = resolve(doc, candidate) else {
            return self.reject(NoTarget::NotAComponent {
                name: candidate.name.clone(),
            });
        };

        let groups = build_groups(doc, target, &self.config);
        tracing::debug!(
            target_id = %target.node().id,
            groups = groups.len(),
            "analyzed selection"
        );
        self.analyzed = Some(target.node().id.clone());
        UiMessage::LoadGroups { data: groups }
    }

    fn reject(&mut self, reason: NoTarget) -> UiMessage {
        tracing::debug!(%reason, "nothing to analyze");
        self.analyzed = None;
        UiMessage::NoSelection {
            message: reason.to_string(),
        }
    }

    /// Analyze the host's current selection and post the result to the UI.
    ///
    /// Supersedes any pending debounced analysis. If the result cannot be
    /// delivered the analyzed node is cleared, since the UI never saw it.
    pub fn run<H: Host>(&mut self, host: &mut H) -> Result<(), HostError> {
        self.debouncer.cancel();
        let selection = host.current_selection();
        let message = self.analyze(host.document(), &selection);
        let posted = host.post_message(message);
        if posted.is_err() {
            self.analyzed = None;
        }
        posted
    }

    /// Record a selection change; analysis runs on the next [`poll`](Self::poll)
    /// after the debounce window has passed without further changes.
    pub fn selection_changed(&mut self, now: Instant) {
        self.debouncer.trigger(now);
        tracing::trace!(
            delay_ms = self.debouncer.delay().as_millis() as u64,
            "analysis scheduled"
        );
    }

    /// How long the host may wait before the next useful [`poll`](Self::poll),
    /// or `None` when no analysis is pending
    pub fn next_poll_in(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Run the pending analysis if its debounce window has elapsed.
    ///
    /// Failures are logged and dropped so the host's event loop keeps going.
    /// Returns whether an analysis ran.
    pub fn poll<H: Host>(&mut self, host: &mut H, now: Instant) -> bool {
        if !self.debouncer.fire(now) {
            return false;
        }
        if let Err(e) = self.run(host) {
            tracing::error!(error = %e, "debounced analysis failed");
        }
        true
    }

    /// Whether a debounced analysis is waiting to run
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Handle a message from the UI
    pub fn handle_message<H: Host>(
        &mut self,
        host: &mut H,
        message: PluginMessage,
    ) -> Result<(), HostError> {
        match message {
            PluginMessage::SelectLayers { ids } => self.select_layers(host, &ids),
        }
    }

    /// Replace the host selection with every resolvable node in `ids`
    pub fn select_layers<H: Host>(
        &mut self,
        host: &mut H,
        ids: &[NodeId],
    ) -> Result<(), HostError> {
        if self.analyzed.is_none() {
            tracing::warn!(
                requested = ids.len(),
                "selection request without an analyzed component"
            );
            host.notify(Notification::error(STALE_SELECTION));
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            if host.document().contains(id) {
                resolved.push(id.clone());
            } else {
                tracing::debug!(%id, "skipping unknown node");
            }
        }

        host.set_selection(resolved.clone());
        if !resolved.is_empty() {
            host.scroll_and_zoom_into_view(&resolved)?;
            host.notify(Notification::info(selected_message(resolved.len())));
        }
        Ok(())
    }
}

fn selected_message(count: usize) -> String {
    if count == 1 {
        "Selected 1 layer.".to_string()
    } else {
        format!("Selected {} layers.", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_message_pluralization() {
        assert_eq!(selected_message(1), "Selected 1 layer.");
        assert_eq!(selected_message(3), "Selected 3 layers.");
    }

    #[test]
    fn test_new_selector_has_no_analysis() {
        let selector = LayerSelector::default();
        assert!(selector.analyzed().is_none());
        assert!(!selector.is_pending());
        assert_eq!(selector.config().debounce_ms, 200);
    }

    #[test]
    fn test_analyze_empty_document_clears_state() {
        let mut selector = LayerSelector::default();
        let message = selector.analyze(&DocumentTree::new(), &[]);
        assert!(matches!(message, UiMessage::NoSelection { .. }));
        assert!(selector.analyzed().is_none());
    }

    #[test]
    fn test_next_poll_in_tracks_debounce_window() {
        let mut selector = LayerSelector::default();
        let start = Instant::now();
        assert_eq!(selector.next_poll_in(start), None);

        selector.selection_changed(start);
        assert_eq!(
            selector.next_poll_in(start + Duration::from_millis(50)),
            Some(Duration::from_millis(150))
        );
        assert_eq!(
            selector.next_poll_in(start + Duration::from_millis(500)),
            Some(Duration::ZERO)
        );
    }
}

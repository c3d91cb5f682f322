use std::{cell::RefCell, collections::BTreeMap};

use toggleui_core::{Event, EventDispatcher, Handler, Interaction, InteractionBinding, ViewId};

/// A handler forwarded through [`BindingTable::call_handler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    /// The forwarded handler.
    pub handler: Handler,
    /// The interaction it was chained behind.
    pub interaction: Interaction,
    /// Whether the dispatch was flagged as internal.
    pub internal: bool,
}

/// An event dispatcher that keeps registered bindings in a table.
///
/// The table does not deliver anything on its own. Callers simulate user input with
/// [`BindingTable::resolve`], which returns the bindings an interaction on a given
/// element would fire, and hand them to the target view.
#[derive(Debug, Default)]
pub struct BindingTable {
    listeners: RefCell<BTreeMap<ViewId, Vec<InteractionBinding>>>,
    records: RefCell<Vec<DispatchRecord>>,
}

impl BindingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bindings that fire when `event` happens on `source`.
    #[must_use]
    pub fn resolve(&self, source: &ViewId, event: Event) -> Vec<InteractionBinding> {
        self.listeners
            .borrow()
            .get(source)
            .map(|bindings| {
                bindings
                    .iter()
                    .filter(|binding| binding.event == event)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns every binding registered on `source`.
    #[must_use]
    pub fn bindings_for(&self, source: &ViewId) -> Vec<InteractionBinding> {
        self.listeners
            .borrow()
            .get(source)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns `true` if any binding is registered on `source`.
    #[must_use]
    pub fn is_listening(&self, source: &ViewId) -> bool {
        self.listeners
            .borrow()
            .get(source)
            .is_some_and(|bindings| !bindings.is_empty())
    }

    /// The handlers forwarded so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.borrow().clone()
    }
}

impl EventDispatcher for BindingTable {
    fn register(&self, source: &ViewId, binding: &InteractionBinding) {
        tracing::trace!(target: "toggleui::headless", %source, event = ?binding.event, "registering binding");
        let mut listeners = self.listeners.borrow_mut();
        let bindings = listeners.entry(source.clone()).or_default();
        bindings.retain(|existing| existing.event != binding.event);
        bindings.push(binding.clone());
    }

    fn unregister(&self, source: &ViewId) {
        if self.listeners.borrow_mut().remove(source).is_some() {
            tracing::trace!(target: "toggleui::headless", %source, "unregistered bindings");
        }
    }

    fn call_handler(&self, handler: &Handler, interaction: &Interaction, internal: bool) {
        tracing::trace!(
            target: "toggleui::headless",
            target_view = %handler.target,
            internal,
            "forwarding handler"
        );
        self.records.borrow_mut().push(DispatchRecord {
            handler: handler.clone(),
            interaction: interaction.clone(),
            internal,
        });
    }
}

//! Interaction events and the typed bindings that route them.
//!
//! A view never stores callbacks. Instead it carries [`InteractionBinding`]s, each one
//! naming the event it reacts to, the view that should receive it, and the [`Action`]
//! that view should perform. Dispatchers resolve bindings and hand them back to the
//! target view, which decides what the action means.

use alloc::string::String;

use crate::ViewId;

/// An enumeration of interactions a user can perform on a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Event {
    /// A touch tap.
    Tap,
    /// A pointer click.
    Click,
}

/// What the target of a binding should do when the binding fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Action {
    /// Switch a toggle view to its other child.
    Toggle,
    /// An application-defined action, identified by name.
    Named(String),
}

/// Routes one kind of [`Event`] on a view to an [`Action`] on a target view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionBinding {
    /// The event the binding reacts to.
    pub event: Event,
    /// The view that receives the action.
    pub target: ViewId,
    /// The action performed by the target.
    pub action: Action,
}

impl InteractionBinding {
    /// Creates a binding from its parts.
    #[must_use]
    pub const fn new(event: Event, target: ViewId, action: Action) -> Self {
        Self {
            event,
            target,
            action,
        }
    }

    /// Shorthand for a tap that toggles `target`.
    #[must_use]
    pub const fn tap_to_toggle(target: ViewId) -> Self {
        Self::new(Event::Tap, target, Action::Toggle)
    }

    /// Returns `true` if this binding asks `view` to toggle.
    #[must_use]
    pub fn toggles(&self, view: &ViewId) -> bool {
        self.action == Action::Toggle && &self.target == view
    }
}

/// A follow-up handler queued behind an interaction.
///
/// After a view finishes reacting to an interaction it forwards the handler through
/// the [`EventDispatcher`](crate::EventDispatcher), flagged as an internal dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Handler {
    /// The view that receives the action.
    pub target: ViewId,
    /// The action to perform.
    pub action: Action,
}

impl Handler {
    /// Creates a handler from its parts.
    #[must_use]
    pub const fn new(target: ViewId, action: Action) -> Self {
        Self { target, action }
    }
}

/// An interaction as observed by a dispatcher: which view it happened on, and how.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    /// The view the user interacted with.
    pub source: ViewId,
    /// The kind of interaction.
    pub event: Event,
}

impl Interaction {
    /// Creates an interaction record.
    #[must_use]
    pub const fn new(source: ViewId, event: Event) -> Self {
        Self { source, event }
    }

    /// A tap on `source`.
    #[must_use]
    pub const fn tap(source: ViewId) -> Self {
        Self::new(source, Event::Tap)
    }
}

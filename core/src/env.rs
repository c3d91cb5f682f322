//! Collaborators and the environment that carries them.
//!
//! Views do not reach for global singletons. Every operation that touches the
//! outside world receives an [`Environment`] and goes through one of its
//! collaborators:
//!
//! - [`Document`] owns the live markup and replaces element content on request.
//! - [`StyleEngine`] applies visual styling to rendered subtrees.
//! - [`EventDispatcher`] listens for interactions and forwards follow-up handlers.
//!
//! Collaborators take `&self`; implementations that keep state use interior
//! mutability. Everything runs on one UI thread, so `Rc` is enough.

use alloc::rc::Rc;

use crate::{Handler, Interaction, InteractionBinding, Markup, ViewId};

/// The live document that rendered markup is inserted into.
pub trait Document {
    /// Replaces the inner content of the element `id` with `markup`.
    ///
    /// An unknown `id` is not an error; nothing happens.
    fn replace_content(&self, id: &ViewId, markup: &Markup);

    /// Tears down whatever is rendered inside the element `id`.
    fn remove_children(&self, id: &ViewId);
}

/// The styling engine that turns plain markup into styled elements.
pub trait StyleEngine {
    /// Styles the subtree rooted at `id`.
    fn apply(&self, id: &ViewId);

    /// Restyles the scrollable page container `id` after it was swapped into the document.
    fn refresh_page(&self, id: &ViewId);

    /// Re-renders fixed headers and footers after content around them changed.
    fn fix_toolbars(&self);
}

/// The dispatcher that delivers interactions to views.
pub trait EventDispatcher {
    /// Starts listening for `binding.event` on the element `source`.
    fn register(&self, source: &ViewId, binding: &InteractionBinding);

    /// Stops listening for every event on the element `source`.
    fn unregister(&self, source: &ViewId);

    /// Delivers `handler` for `interaction`.
    ///
    /// `internal` is `true` when the call is chained behind another handler rather than
    /// caused directly by the user.
    fn call_handler(&self, handler: &Handler, interaction: &Interaction, internal: bool);
}

impl_debug!(dyn Document);
impl_debug!(dyn StyleEngine);
impl_debug!(dyn EventDispatcher);

/// Bundle of collaborators handed to every view operation.
///
/// Cloning an environment is cheap and shares the collaborators.
#[derive(Debug, Clone)]
pub struct Environment {
    document: Rc<dyn Document>,
    styles: Rc<dyn StyleEngine>,
    dispatcher: Rc<dyn EventDispatcher>,
}

impl Environment {
    /// Creates an environment from explicit collaborators.
    #[must_use]
    pub fn new(
        document: Rc<dyn Document>,
        styles: Rc<dyn StyleEngine>,
        dispatcher: Rc<dyn EventDispatcher>,
    ) -> Self {
        Self {
            document,
            styles,
            dispatcher,
        }
    }

    /// Replaces the document collaborator.
    #[must_use]
    pub fn with_document(mut self, document: Rc<dyn Document>) -> Self {
        self.document = document;
        self
    }

    /// Replaces the styling engine.
    #[must_use]
    pub fn with_styles(mut self, styles: Rc<dyn StyleEngine>) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the event dispatcher.
    #[must_use]
    pub fn with_dispatcher(mut self, dispatcher: Rc<dyn EventDispatcher>) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// The document collaborator.
    #[must_use]
    pub fn document(&self) -> &dyn Document {
        self.document.as_ref()
    }

    /// The styling engine.
    #[must_use]
    pub fn styles(&self) -> &dyn StyleEngine {
        self.styles.as_ref()
    }

    /// The event dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &dyn EventDispatcher {
        self.dispatcher.as_ref()
    }
}

impl Default for Environment {
    /// An environment whose collaborators ignore every call.
    fn default() -> Self {
        Self::new(Rc::new(Detached), Rc::new(Detached), Rc::new(Detached))
    }
}

/// A collaborator that is not attached to anything and ignores every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Document for Detached {
    fn replace_content(&self, _id: &ViewId, _markup: &Markup) {}
    fn remove_children(&self, _id: &ViewId) {}
}

impl StyleEngine for Detached {
    fn apply(&self, _id: &ViewId) {}
    fn refresh_page(&self, _id: &ViewId) {}
    fn fix_toolbars(&self) {}
}

impl EventDispatcher for Detached {
    fn register(&self, _source: &ViewId, _binding: &InteractionBinding) {}
    fn unregister(&self, _source: &ViewId) {}
    fn call_handler(&self, _handler: &Handler, _interaction: &Interaction, _internal: bool) {}
}
